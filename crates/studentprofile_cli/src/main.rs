//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `studentprofile_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use studentprofile_core::screen::display::render_overview;
use studentprofile_core::ProfileState;

fn main() {
    println!("studentprofile_core ping={}", studentprofile_core::ping());
    println!(
        "studentprofile_core version={}",
        studentprofile_core::core_version()
    );
    // Seed-state overview doubles as a quick render sanity check.
    print!("{}", render_overview(&ProfileState::default()));
}
