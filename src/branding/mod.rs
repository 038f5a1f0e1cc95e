//! Universal Login page templates shipped with the binary.

use crate::interactive::PickerOptions;

pub const DEFAULT_TEMPLATE: &str = include_str!("data/default-template.liquid");
pub const IMAGE_TEMPLATE: &str = include_str!("data/image-template.liquid");
pub const FOOTER_TEMPLATE: &str = include_str!("data/footer-template.liquid");

/// Templates offered by `branding templates update`, in menu order.
pub fn template_options() -> PickerOptions {
   PickerOptions::new([
      ("Basic", DEFAULT_TEMPLATE),
      ("Login box + image", IMAGE_TEMPLATE),
      ("Page footers", FOOTER_TEMPLATE),
   ])
}
