// SPDX-License-Identifier: MPL-2.0
//! Small reusable view pieces shared by the portfolio sections.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, Column, Row, Text};
use iced::{Element, Font};

/// Pill label for tags and tech stack entries.
pub fn chip<'a, M: 'a>(label: &'a str) -> Element<'a, M> {
    container(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::chip)
        .into()
}

/// Row of chips. Iced rows do not wrap, so long lists are split across
/// several rows of `per_row` chips.
pub fn chip_rows<'a, M: 'a>(labels: &'a [&'a str], per_row: usize) -> Element<'a, M> {
    let per_row = per_row.max(1);
    let mut rows = Column::new().spacing(spacing::XXS);
    for chunk in labels.chunks(per_row) {
        let row = chunk
            .iter()
            .fold(Row::new().spacing(spacing::XXS), |row, label| {
                row.push(chip(*label))
            });
        rows = rows.push(row);
    }
    rows.into()
}

/// Section heading with a monospace eyebrow above it.
pub fn heading<'a, M: 'a>(eyebrow: String, title: String) -> Element<'a, M> {
    Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(eyebrow)
                .size(typography::CAPTION)
                .font(Font::MONOSPACE),
        )
        .push(Text::new(title).size(typography::TITLE_LG))
        .into()
}
