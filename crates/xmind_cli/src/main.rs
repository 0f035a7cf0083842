//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `xmind_core` linkage with a minimal executable.
//! - Print a deterministic summary of a freshly built default document.

use xmind_core::Xmind;

fn main() {
    println!("xmind_core ping={}", xmind_core::ping());
    println!("xmind_core version={}", xmind_core::core_version());

    let document = Xmind::new();
    match document.first_sheet() {
        Ok(sheet) => println!(
            "default sheet=\"{}\" root=\"{}\" main_topics={}",
            sheet.name(),
            sheet.root_topic().text,
            sheet.root_topic().children().len()
        ),
        Err(err) => eprintln!("default document unavailable: {err}"),
    }
}
