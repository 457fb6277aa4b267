use spiritcli::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_parse_provider_valid_inputs() {
    assert_eq!(parse_provider("replicate").unwrap(), Provider::Replicate);
    assert_eq!(parse_provider("huggingface").unwrap(), Provider::HuggingFace);

    // Aliases and casing
    assert_eq!(parse_provider("hf").unwrap(), Provider::HuggingFace);
    assert_eq!(
        parse_provider("hugging-face").unwrap(),
        Provider::HuggingFace
    );
    assert_eq!(parse_provider("REPLICATE").unwrap(), Provider::Replicate);

    // Surrounding whitespace is ignored
    assert_eq!(parse_provider("  replicate ").unwrap(), Provider::Replicate);
}

#[test]
fn test_parse_provider_invalid_inputs() {
    // Empty string
    let result = parse_provider("");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Whitespace only
    let result = parse_provider("   ");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Unknown provider
    let result = parse_provider("midjourney");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'midjourney'"));
}

#[test]
fn test_provider_display() {
    assert_eq!(Provider::Replicate.to_string(), "replicate");
    assert_eq!(Provider::HuggingFace.to_string(), "huggingface");
}

#[test]
fn test_format_played_at() {
    // RFC 3339 timestamps are shortened for table display
    let formatted = format_played_at("2024-05-01T12:34:56.789Z");
    assert_eq!(formatted, "2024-05-01 12:34");

    let formatted = format_played_at("2024-05-01T12:34:56+00:00");
    assert_eq!(formatted, "2024-05-01 12:34");

    // Unparseable input passes through untouched
    let formatted = format_played_at("not-a-timestamp");
    assert_eq!(formatted, "not-a-timestamp");
}

#[test]
fn test_summarize_genres() {
    let genres: Vec<String> = ["pop", "rock", "jazz", "metal"]
        .iter()
        .map(|g| g.to_string())
        .collect();

    // At most three genres are shown
    assert_eq!(summarize_genres(&genres), "pop,rock,jazz");
    assert_eq!(summarize_genres(&genres[..2]), "pop,rock");
    assert_eq!(summarize_genres(&[]), "");
}
