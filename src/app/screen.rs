// SPDX-License-Identifier: MPL-2.0
//! Screen and section enumerations for application navigation.

/// Top-level screens. The intro plays first and hands over to the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Portfolio,
}

/// Sections of the portfolio screen, in navbar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Hero,
    Projects,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::Projects,
        Section::About,
        Section::Contact,
    ];

    /// Fluent key of the navbar label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Hero => "nav-home",
            Section::Projects => "nav-projects",
            Section::About => "nav-about",
            Section::Contact => "nav-contact",
        }
    }
}
