// Copyright 2025 the Squiggles Authors
// SPDX-License-Identifier: Apache-2.0

//! Squiggles: a freehand drawing canvas built with Xilem

use xilem::EventLoop;

fn main() -> anyhow::Result<()> {
    squiggles::run(EventLoop::with_user_event())
}
