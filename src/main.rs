// SPDX-License-Identifier: MPL-2.0
use iced_reel::app::{self, Flags};
use iced_reel::catalog::Catalog;
use iced_reel::config;
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or(None);
    let catalog_path = args
        .opt_value_from_str::<_, PathBuf>("--catalog")
        .unwrap_or(None)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CATALOG_PATH));

    // A catalog that cannot be read is a startup error; an empty one is not.
    let catalog = match Catalog::load_from_path(&catalog_path) {
        Ok(catalog) => catalog,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    app::run(Flags { lang, catalog })
}
