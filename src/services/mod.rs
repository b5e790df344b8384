use validator::ValidationErrors;

pub mod contact;
pub mod newsletter;
pub mod sleep;

/// Joins the messages of every failed rule, following `fields` order so the
/// visitor always sees the same text for the same input.
pub(crate) fn validation_message(errors: &ValidationErrors, fields: &[&str]) -> String {
    let by_field = errors.field_errors();
    fields
        .iter()
        .filter_map(|field| by_field.get(*field))
        .flat_map(|errors| errors.iter())
        .map(|error| match &error.message {
            Some(message) => message.to_string(),
            None => format!("Invalid {}", error.code),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
