// SPDX-License-Identifier: MPL-2.0
//! Chat service used when no text-generation backend is available.

use super::{ChatService, Reply};
use futures_util::future::{self, BoxFuture, FutureExt};

/// Answers every message with the offline sentinel.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineService;

impl ChatService for OfflineService {
    fn send(&self, _message: &str) -> BoxFuture<'static, Reply> {
        future::ready(Reply::offline()).boxed()
    }
}
