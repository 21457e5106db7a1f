use crate::error::{ConvertError, KnowledgeError};
use crate::flight::{FlightyRow, ResolvedFlightLeg};
use crate::knowledge::knowledge_base::KnowledgeBase;
use std::io::Read;

pub mod airtrail;
pub mod fr24;

/// Resolves every row of a Flighty export and maps it with `map`.
///
/// The first failing row is logged in full and aborts the run.
pub fn convert_rows<R, T, F>(
    kb: &KnowledgeBase,
    input: R,
    mut map: F,
) -> Result<Vec<T>, ConvertError>
where
    R: Read,
    F: FnMut(&FlightyRow, &ResolvedFlightLeg<'_>) -> Result<T, KnowledgeError>,
{
    let mut reader = csv::Reader::from_reader(input);
    let mut out = Vec::new();
    for (idx, row) in reader.deserialize::<FlightyRow>().enumerate() {
        let row = row?;
        let line = idx + 1;
        let converted = kb
            .resolve_leg(&row)
            .and_then(|leg| map(&row, &leg))
            .map_err(|source| {
                log::error!("row {line} could not be converted: {source}\n{row:#?}");
                ConvertError::Row { line, source }
            })?;
        out.push(converted);
    }
    log::info!("converted {} flights", out.len());
    Ok(out)
}
