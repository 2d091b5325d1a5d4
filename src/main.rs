//! Selection palette for Bezy glyph outlines.
//!
//! Select by what a point is, not only by where it is.

use bezy_selection::core;

fn main() {
    let cli_args = core::platform::get_cli_args();
    match core::run_app(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
