//! batch font scanner
//!
//! Walks the given files and directories, parses each file as a font or
//! font collection, and prints one line per contained font. Files that are
//! not usable fonts are counted and reported, never fatal: the tool is
//! meant to be pointed at large, untrusted font stores.

use std::path::{Path, PathBuf};

use clap::Parser;
use log::warn;
use sniff_fonts::types::{NameId, Tag};
use sniff_fonts::{tables::name, Font, FontFile, FontReader};

/// The tags a scan asks the parser to decode. Only `name` currently has a
/// decoder; the rest are accepted and ignored.
const WANTED_TAGS: [Tag; 6] = [
    name::TAG,
    Tag::new(b"OS/2"),
    Tag::new(b"head"),
    Tag::new(b"hhea"),
    Tag::new(b"maxp"),
    Tag::new(b"post"),
];

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Font files or directories to scan.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Also list every entry in each font's table directory.
    #[arg(short, long)]
    tables: bool,
}

#[derive(Debug, Default)]
struct Totals {
    fonts: usize,
    invalid: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut totals = Totals::default();
    for path in &args.paths {
        scan_path(path, &args, &mut totals);
    }
    println!("{} fonts found, {} files not usable", totals.fonts, totals.invalid);
}

fn scan_path(path: &Path, args: &Args, totals: &mut Totals) {
    if path.is_dir() {
        let entries = match std::fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("{}: {e}", path.display());
                return;
            }
        };
        for entry in entries {
            match entry {
                Ok(entry) => scan_path(&entry.path(), args, totals),
                Err(e) => warn!("{}: {e}", path.display()),
            }
        }
    } else {
        scan_file(path, args, totals);
    }
}

fn scan_file(path: &Path, args: &Args, totals: &mut Totals) {
    let mut reader = match FontReader::open(path) {
        Ok(reader) => reader,
        Err(e) => {
            warn!("{}: {e}", path.display());
            return;
        }
    };
    match FontFile::read(&mut reader, &WANTED_TAGS) {
        Ok(file) => {
            for (index, font) in file.fonts().enumerate() {
                totals.fonts += 1;
                print_font(path, index, font, args);
            }
        }
        Err(e) => {
            totals.invalid += 1;
            println!("{}: {e}", path.display());
        }
    }
}

fn print_font(path: &Path, index: usize, font: &Font, args: &Args) {
    let flavor = if font.contains_cff() { "CFF" } else { "TrueType" };
    let family = font
        .name()
        .and_then(|name| name.string(NameId::FAMILY_NAME))
        .or_else(|| font.name().and_then(|name| name.string(NameId::FULL_NAME)))
        .unwrap_or_else(|| "<unnamed>".into());
    println!(
        "{}[{index}]: {family} ({flavor}, {} tables)",
        path.display(),
        font.num_tables()
    );

    if args.tables {
        for record in font.table_records() {
            println!(
                "  {} offset 0x{:08X} length {:8} checksum 0x{:08X}",
                record.tag(),
                record.offset(),
                record.length(),
                record.checksum()
            );
        }
    }
}
