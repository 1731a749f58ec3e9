// SPDX-License-Identifier: MPL-2.0
//! `impl State` blocks, split by concern.

mod arrange;
mod grouping;
mod helpers;
mod history;
mod layers;
mod persistence;
mod pointer;
mod routing;
mod selection;
