// src/pipeline.rs
//
// fetch → clean → load map → load aliases → join.
// Stages run in order on the calling thread; the first error aborts the run.

use std::error::Error;

use crate::{
    clean::{self, ProductionRecord},
    config::options::AppOptions,
    join::{self, AliasTable, JoinReport, JoinedPoint},
    map_data,
    progress::Progress,
    specs,
};

pub const STAGES: [&str; 5] = ["fetch", "clean", "map", "aliases", "join"];

/// Everything the renderers and exporters need.
#[derive(Clone, Debug, Default)]
pub struct Outputs {
    pub records: Vec<ProductionRecord>,
    pub joined: Vec<JoinedPoint>,
    pub report: JoinReport,
}

impl Outputs {
    pub fn matched_points(&self) -> usize {
        self.joined.iter().filter(|j| j.record.is_some()).count()
    }
}

pub fn run(
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Outputs, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(STAGES.len());
    }
    let res = run_stages(opts, &mut progress);
    if let Some(p) = progress.as_deref_mut() {
        match &res {
            Ok(out) => p.log(&format!(
                "Done: {} records, {} map points ({} matched)",
                out.records.len(),
                out.joined.len(),
                out.matched_points()
            )),
            Err(e) => p.log(&format!("Error: {e}")),
        }
        p.finish();
    }
    res
}

fn run_stages(
    opts: &AppOptions,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<Outputs, Box<dyn Error>> {
    let mut step = |stage: &str, msg: String| {
        logf!("Pipeline: {} done ({})", stage, msg);
        if let Some(p) = progress.as_deref_mut() {
            p.log(&msg);
            p.stage_done(stage);
        }
    };

    let table = specs::production::fetch(&opts.fetch).map_err(|e| stage_err("fetch", e))?;
    step("fetch", format!("Fetched table: {} rows", table.row_count()));

    let records = clean::clean(&table, &opts.clean).map_err(|e| stage_err("clean", e))?;
    step("clean", format!("Cleaned {} records", records.len()));

    let points = map_data::load(&opts.join.map_file).map_err(|e| stage_err("map", e))?;
    step("map", format!("Loaded {} map points", points.len()));

    let aliases = match &opts.join.aliases_file {
        Some(path) => AliasTable::load(path).map_err(|e| stage_err("aliases", e))?,
        None => AliasTable::new(),
    };
    step("aliases", format!("{} aliases", aliases.len()));

    let joined = join::left_join(&points, &records, &aliases);
    step(
        "join",
        format!(
            "Joined: {} unmatched records, {} unmatched regions",
            joined.report.unmatched_records.len(),
            joined.report.unmatched_regions.len()
        ),
    );

    Ok(Outputs { records, joined: joined.points, report: joined.report })
}

fn stage_err(stage: &str, e: Box<dyn Error>) -> Box<dyn Error> {
    loge!("Pipeline: {} failed: {}", stage, e);
    format!("{stage}: {e}").into()
}
