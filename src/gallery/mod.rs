// SPDX-License-Identifier: MPL-2.0
//! Project gallery: static catalog, selection pointer and keyboard mapping.

pub mod carousel;
pub mod catalog;
pub mod keys;

pub use carousel::{CarouselNavigator, Identified, NavigationError};
pub use catalog::{Project, PROJECTS};
