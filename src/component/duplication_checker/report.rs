use super::deleter::DeletionSummary;
use crate::tools::ScanResult;
use console::style;
use indicatif::HumanBytes;
use rust_i18n::t;
use std::io::{self, Write};

const TABLE_WIDTH: usize = 65;

fn rule() -> String {
    "-".repeat(TABLE_WIDTH)
}

/// 列出所有相同大小（兩個以上）的檔案，由小到大
pub fn write_size_table<W: Write>(out: &mut W, scan: &ScanResult) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        style(format!(
            "{:<17} {}",
            t!("report.header_size"),
            t!("report.header_paths")
        ))
        .bold()
    )?;
    writeln!(out, "{}", rule())?;

    for (size, files) in scan.duplicate_size_groups() {
        for file in files {
            writeln!(out, "{size:<17} {}", file.display())?;
        }
        writeln!(out, "{}", rule())?;
    }
    Ok(())
}

pub fn write_savings<W: Write>(out: &mut W, bytes: u64) -> io::Result<()> {
    writeln!(
        out,
        "\n{} {}",
        t!("report.potential_savings"),
        style(format!("{bytes} bytes ({})", HumanBytes(bytes))).yellow().bold()
    )
}

pub fn print_size_table(scan: &ScanResult) -> io::Result<()> {
    write_size_table(&mut io::stdout().lock(), scan)
}

pub fn print_savings(bytes: u64) -> io::Result<()> {
    write_savings(&mut io::stdout().lock(), bytes)
}

pub fn print_scan_errors(scan: &ScanResult) {
    for err in &scan.errors {
        let location = err
            .path
            .as_ref()
            .map_or_else(String::new, |p| p.display().to_string());
        println!(
            "{}",
            style(t!("report.scan_error", path = location, error = &err.message)).red()
        );
    }
}

pub fn print_deletion_summary(summary: &DeletionSummary) {
    println!();
    println!("{}", style(t!("report.summary_title")).cyan().bold());
    println!("  {}", t!("report.summary_groups", count = summary.duplicate_groups));
    println!(
        "  {}",
        t!("report.summary_deleted", count = style(summary.deleted).green())
    );
    println!("  {}", t!("report.summary_skipped", count = summary.skipped));

    let errors = summary.hash_errors + summary.delete_errors;
    if errors > 0 {
        println!("  {}", t!("report.summary_errors", count = style(errors).red()));
    }

    println!(
        "  {}",
        t!(
            "report.summary_freed",
            bytes = summary.bytes_freed,
            human = HumanBytes(summary.bytes_freed)
        )
    );

    if summary.interrupted {
        println!("{}", style(t!("report.interrupted")).yellow());
    }
}
