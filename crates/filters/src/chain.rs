use std::io::Read;

use crate::trace::trace_stage_added;
use crate::{CaseDirection, CaseFold, ConfigError, Transform, TransformList, TrimSpaces};

/// Wraps `upstream` with one filter per transform, in list order.
///
/// The first transform reads directly from `upstream`, each later one reads
/// from its predecessor, and the caller reads from the last stage. An empty
/// list returns `upstream` unchanged. No byte is read during construction.
pub fn build_chain<'a, R>(upstream: R, transforms: &TransformList) -> Box<dyn Read + 'a>
where
    R: Read + 'a,
{
    let mut stage: Box<dyn Read + 'a> = Box::new(upstream);

    for (index, transform) in transforms.iter().copied().enumerate() {
        trace_stage_added(index, transform);
        stage = match transform {
            Transform::LowerCase => Box::new(CaseFold::new(stage, CaseDirection::Lower)),
            Transform::UpperCase => Box::new(CaseFold::new(stage, CaseDirection::Upper)),
            Transform::TrimSpaces => Box::new(TrimSpaces::new(stage)),
        };
    }

    stage
}

/// Validates transform `names` and builds the chain over `upstream`.
///
/// Validation completes before `upstream` is wrapped, so a rejected list
/// leaves the source untouched.
pub fn build_chain_from_names<'a, R, I, S>(
    upstream: R,
    names: I,
) -> Result<Box<dyn Read + 'a>, ConfigError>
where
    R: Read + 'a,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let transforms = TransformList::parse_names(names)?;
    Ok(build_chain(upstream, &transforms))
}
