// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The control page served on `/`.
//!
//! The page is self-contained: it polls `/status` every 4 seconds, eases its
//! aurora color toward the reported color while the bulb is powered, and
//! sends button presses to the mutating routes without waiting for replies.

/// HTML, CSS and script of the control page.
pub const INDEX_HTML: &str = include_str!("../../assets/index.html");
