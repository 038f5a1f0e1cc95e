/// Validate that input is not empty
pub fn validate_required(input: &str) -> Result<(), String> {
   if input.trim().is_empty() {
      Err("Value is required".to_string())
   } else {
      Ok(())
   }
}
