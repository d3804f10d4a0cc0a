// SPDX-License-Identifier: MPL-2.0
//! Sidebar list of catalog entries.
//!
//! Display-only component: given the catalog it produces one selectable row
//! per entry, in catalog order, and emits a selection message when a row is
//! pressed. It holds no state of its own.

use crate::catalog::{Catalog, VideoId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, image, scrollable, text, Column};
use iced::{Element, Length};

/// Messages emitted by the list.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A row was pressed.
    Select(VideoId),
}

/// Context required to render the list.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    /// Index of the currently selected entry, highlighted in the list.
    pub selected_index: Option<usize>,
}

/// Renders one selectable row per catalog entry, preserving catalog order.
///
/// An empty catalog yields an empty-state placeholder instead of rows.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.catalog.is_empty() {
        return container(text(ctx.i18n.tr("list-empty")).size(typography::BODY))
            .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(styles::container::sidebar)
            .into();
    }

    let mut rows: Column<'a, Message> = column![].spacing(spacing::XXS);

    for (index, entry) in ctx.catalog.iter().enumerate() {
        let thumbnail = image(image::Handle::from_path(&entry.thumbnail))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::LIST_THUMBNAIL_HEIGHT));

        let row_content = column![thumbnail, text(entry.title.clone()).size(typography::BODY),]
            .spacing(spacing::XXS);

        let row = button(row_content)
            .on_press(Message::Select(entry.id.clone()))
            .padding(spacing::XS)
            .width(Length::Fill);

        let row: Element<'a, Message> = if ctx.selected_index == Some(index) {
            row.style(styles::button::selected).into()
        } else {
            row.style(styles::button::list_entry).into()
        };

        rows = rows.push(row);
    }

    container(scrollable(rows.padding(spacing::XS)))
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::sidebar)
        .into()
}
