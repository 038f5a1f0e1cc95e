use crate::error::{CliError, CliResult};

/// Ordered label → payload table backing a single-select prompt.
///
/// Labels are what the operator sees; payloads are what gets submitted. The
/// prompt is always built from [`PickerOptions::labels`], so lookups normally
/// hit, but a label coming from a flag may not.
#[derive(Debug, Clone)]
pub struct PickerOptions<V = &'static str> {
   options: Vec<(&'static str, V)>,
}

impl<V> PickerOptions<V> {
   pub fn new(options: impl IntoIterator<Item = (&'static str, V)>) -> Self {
      let options: Vec<_> = options.into_iter().collect();
      debug_assert!(
         options
            .iter()
            .enumerate()
            .all(|(i, (label, _))| options[..i].iter().all(|(other, _)| other != label)),
         "picker labels must be unique"
      );
      Self { options }
   }

   /// Labels in insertion order.
   pub fn labels(&self) -> Vec<String> {
      self
         .options
         .iter()
         .map(|(label, _)| label.to_string())
         .collect()
   }

   pub fn value_for(&self, label: &str) -> CliResult<&V> {
      self
         .options
         .iter()
         .find(|(candidate, _)| *candidate == label)
         .map(|(_, value)| value)
         .ok_or_else(|| {
            CliError::NotFound(format!(
               "'{label}' is not one of: {}",
               self.labels().join(", ")
            ))
         })
   }
}
