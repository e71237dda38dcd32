// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::{
    config::options::{AppOptions, ExportFormat, ExportOptions, Source},
    file,
    pipeline::{self, Outputs},
    progress::Progress,
    render::format_thousands,
    stats,
};

/// Everything the command line asked for.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    pub options: AppOptions,
    pub csv_out: Option<PathBuf>,
    pub joined_out: Option<PathBuf>,
    pub print_unmatched: bool,
    pub summary: Option<i64>,
}

pub const HELP: &str = include_str!("cli_help.txt");

pub enum Command {
    Help,
    Run(Params),
}

pub fn run() -> Result<(), Box<dyn Error>> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{HELP}");
            Ok(())
        }
        Command::Run(params) => execute(&params),
    }
}

/// Run the pipeline and write every requested output.
pub fn execute(params: &Params) -> Result<(), Box<dyn Error>> {
    let mut prog = CliProgress::default();
    let outputs = pipeline::run(&params.options, Some(&mut prog))?;

    let map_path = file::export(&outputs, &params.options)?;
    eprintln!("Wrote {}", map_path.display());

    if let Some(path) = &params.csv_out {
        let mut export = ExportOptions::default();
        export.format = table_format(path);
        file::write_records(path, &outputs.records, &export)?;
        eprintln!("Wrote {}", path.display());
    }
    if let Some(path) = &params.joined_out {
        let sep = table_format(path).delim().unwrap_or(',');
        file::write_joined(path, &outputs.joined, true, sep)?;
        eprintln!("Wrote {}", path.display());
    }
    if params.print_unmatched {
        print_unmatched(&outputs);
    }
    if let Some(threshold) = params.summary {
        print_summary(&outputs, threshold);
    }
    Ok(())
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, Box<dyn Error>> {
    let mut params = Params::default();
    let opts = &mut params.options;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| format!("Missing value for {flag}"));
        match a.as_str() {
            "--url" => opts.fetch.source = Source::Url(value("--url")?),
            "--html" => opts.fetch.source = Source::HtmlFile(PathBuf::from(value("--html")?)),
            "--map" => opts.join.map_file = PathBuf::from(value("--map")?),
            "--aliases" => opts.join.aliases_file = Some(PathBuf::from(value("--aliases")?)),
            "-o" | "--out" => {
                let v = value("--out")?;
                opts.export.set_path(&v);
                if opts.export.format.delim().is_some() {
                    return Err(format!("--out must be a map file (.svg or .png): {v}").into());
                }
            }
            "--format" => {
                let v = value("--format")?;
                let fmt = match ExportFormat::from_ext(&v) {
                    Some(f @ (ExportFormat::Svg | ExportFormat::Png)) => f,
                    _ => return Err(format!("Unknown format: {v} (expected svg or png)").into()),
                };
                opts.export.set_format(fmt);
            }
            "--csv" => params.csv_out = Some(PathBuf::from(value("--csv")?)),
            "--joined" => params.joined_out = Some(PathBuf::from(value("--joined")?)),
            "--unmatched" => params.print_unmatched = true,
            "--summary" => {
                let v = value("--summary")?;
                let t: i64 = v.trim().parse().map_err(|_| format!("Bad threshold: {v}"))?;
                params.summary = Some(t);
            }
            "--loose-headers" => opts.clean.strict_headers = false,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    logf!("CLI: {:?}", params);
    Ok(Command::Run(params))
}

/// `.tsv` → TSV, anything else CSV.
fn table_format(path: &std::path::Path) -> ExportFormat {
    match path.extension().and_then(|e| ExportFormat::from_ext(&e.to_string_lossy())) {
        Some(ExportFormat::Tsv) => ExportFormat::Tsv,
        _ => ExportFormat::Csv,
    }
}

fn print_unmatched(outputs: &Outputs) {
    println!("# Production records without a polygon ({})", outputs.report.unmatched_records.len());
    for name in &outputs.report.unmatched_records {
        println!("{name}");
    }
    println!("# Regions without a production record ({})", outputs.report.unmatched_regions.len());
    for name in &outputs.report.unmatched_regions {
        println!("{name}");
    }
}

fn print_summary(outputs: &Outputs, threshold: i64) {
    let split = stats::split_means(&outputs.records, threshold);
    let fmt = |m: Option<f64>| m.map(|v| format!("{v:.2}")).unwrap_or_else(|| s!("NA"));
    println!("threshold\t{}", format_thousands(split.threshold));
    println!("above\t{}\t{}", split.above.count, fmt(split.above.mean));
    println!("below\t{}\t{}", split.below.count, fmt(split.below.mean));
}

/// Prints stage progress to stderr.
#[derive(Default)]
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn stage_done(&mut self, stage: &str) {
        self.done += 1;
        logd!("CLI: stage {} ({}/{})", stage, self.done, self.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn parse(args: &[&str]) -> Result<Command, Box<dyn Error>> {
        parse_args(args.iter().map(|s| s!(*s)))
    }

    fn params(args: &[&str]) -> Params {
        match parse(args).unwrap() {
            Command::Run(p) => p,
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn no_args_means_defaults() {
        assert_eq!(params(&[]), Params::default());
    }

    #[test]
    fn offline_run_with_all_outputs() {
        let p = params(&[
            "--html", "page.html", "--map", "w.csv", "--aliases", "a.csv",
            "-o", "maps/oil.png", "--csv", "t.tsv", "--joined", "j.csv",
            "--unmatched", "--summary", "822675", "--loose-headers",
        ]);
        assert_eq!(p.options.fetch.source, Source::HtmlFile(PathBuf::from("page.html")));
        assert_eq!(p.options.join.map_file, Path::new("w.csv"));
        assert_eq!(p.options.join.aliases_file.as_deref(), Some(Path::new("a.csv")));
        assert_eq!(p.options.export.format, ExportFormat::Png);
        assert_eq!(p.options.export.out_path(), Path::new("maps").join("oil.png"));
        assert_eq!(p.csv_out.as_deref(), Some(Path::new("t.tsv")));
        assert!(p.print_unmatched);
        assert_eq!(p.summary, Some(822_675));
        assert!(!p.options.clean.strict_headers);
    }

    #[test]
    fn format_flag_replaces_extension() {
        let p = params(&["-o", "x/map.svg", "--format", "png"]);
        assert_eq!(p.options.export.out_path(), Path::new("x").join("map.png"));
    }

    #[test]
    fn bad_input_is_rejected() {
        assert!(parse(&["--format", "csv"]).is_err());
        assert!(parse(&["--summary", "lots"]).is_err());
        assert!(parse(&["--url"]).is_err());
        assert!(parse(&["-o", "table.csv"]).is_err());
        assert!(parse(&["--frobnicate"]).is_err());
        assert!(matches!(parse(&["-h"]).unwrap(), Command::Help));
    }

    #[test]
    fn help_says_png_is_map_only() {
        let line = HELP.lines().find(|l| l.trim_start().starts_with("--format")).unwrap();
        assert!(line.contains("PNG"));
        let png = &HELP[HELP.find("PNG").unwrap()..];
        for part in ["title", "caption", "legend"] {
            assert!(png.contains(part), "help should say PNG has no {part}");
        }
    }

    #[test]
    fn table_format_from_extension() {
        assert_eq!(table_format(Path::new("a.tsv")), ExportFormat::Tsv);
        assert_eq!(table_format(Path::new("a.csv")), ExportFormat::Csv);
        assert_eq!(table_format(Path::new("a")), ExportFormat::Csv);
    }
}
