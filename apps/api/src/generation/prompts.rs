//! Prompt templates and decoding parameters for the generation operations.

use crate::generation::DecodingParams;

/// Job-description drafting prompt.
/// Replace `{title}`, `{years}`, `{skills}`, `{company}`, `{industry}`,
/// `{employment}`, and `{location}` before sending.
pub const JD_PROMPT_TEMPLATE: &str = "Write a short job description for a {title} role \
    requiring {years} years of experience in {skills}. \
    Company: {company}, Industry: {industry}, \
    Employment type: {employment}, Location: {location}.";

/// Interview invitation prompt for the selected candidate. Replace `{name}`.
pub const INVITATION_PROMPT_TEMPLATE: &str =
    "Write a short, professional interview invitation email for the candidate {name}. \
    Keep it polite and concise, mentioning the role and asking to confirm availability.";

/// Rejection email prompt. Replace `{name}`, and `{missing_skills}` with
/// either an empty string or a parenthesized skill list.
pub const REJECTION_PROMPT_TEMPLATE: &str = "Write a rejection email for the candidate {name}. \
    Explain that they were not selected after careful consideration because they lack \
    some of the key skills{missing_skills}. \
    Encourage them to apply for future opportunities that may better match their profile. \
    Limit the response to 3-5 concise sentences, avoiding repetition or placeholders.";

/// Decoding bounds for job-description drafting.
pub const JD_PARAMS: DecodingParams = DecodingParams {
    min_length: 85,
    max_length: 300,
    top_p: 0.9,
    temperature: 0.8,
    repetition_penalty: 3.0,
};

/// Decoding bounds for notification emails.
pub const EMAIL_PARAMS: DecodingParams = DecodingParams {
    min_length: 40,
    max_length: 120,
    top_p: 0.9,
    temperature: 0.8,
    repetition_penalty: 3.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jd_output_is_longer_than_email_output() {
        assert!(JD_PARAMS.max_length > EMAIL_PARAMS.max_length);
        assert_eq!(JD_PARAMS.min_length, 85);
        assert_eq!(JD_PARAMS.max_length, 300);
        assert_eq!(EMAIL_PARAMS.min_length, 40);
        assert_eq!(EMAIL_PARAMS.max_length, 120);
    }

    #[test]
    fn test_sampling_parameters_are_shared() {
        assert_eq!(JD_PARAMS.top_p, EMAIL_PARAMS.top_p);
        assert_eq!(JD_PARAMS.temperature, EMAIL_PARAMS.temperature);
        assert_eq!(JD_PARAMS.repetition_penalty, EMAIL_PARAMS.repetition_penalty);
    }
}
