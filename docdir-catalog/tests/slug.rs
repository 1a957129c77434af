use docdir_catalog::{Provider, ProviderId, SlugParts, decode, encode, slugify_segment};

fn provider(name: &str, suburb: &str) -> Provider {
    Provider::new(ProviderId(1))
        .with_display_name(name)
        .with_suburb(suburb)
}

// ── Encoding ────────────────────────────────────────────────────────────────

#[test]
fn encodes_name_and_suburb() {
    assert_eq!(encode(&provider("Smith", "Sandton")), "dr-smith-sandton");
}

#[test]
fn multi_word_fields_become_hyphenated() {
    assert_eq!(
        encode(&provider("John  Smith", "Sandton Central")),
        "dr-john-smith-sandton-central"
    );
}

#[test]
fn display_name_with_title_keeps_title() {
    assert_eq!(encode(&provider("Dr Smith", "Sandton")), "dr-dr-smith-sandton");
}

#[test]
fn suburb_segment_omitted_when_blank() {
    assert_eq!(encode(&provider("Smith", "")), "dr-smith");
    assert_eq!(encode(&provider("Smith", "   ")), "dr-smith");
    let no_suburb = Provider::new(ProviderId(2)).with_display_name("Smith");
    assert_eq!(encode(&no_suburb), "dr-smith");
}

#[test]
fn punctuation_is_stripped_without_separating() {
    assert_eq!(encode(&provider("O'Brien", "St. Helena")), "dr-obrien-st-helena");
    assert_eq!(encode(&provider("Smith & Jones", "")), "dr-smith-jones");
}

#[test]
fn repeated_hyphens_collapse() {
    assert_eq!(encode(&provider("Van--der - Merwe", "")), "dr-van-der-merwe");
}

#[test]
fn surrounding_whitespace_never_leaks_hyphens() {
    assert_eq!(encode(&provider("  Smith ", " Sandton ")), "dr-smith-sandton");
}

#[test]
fn missing_fields_encode_without_panicking() {
    assert_eq!(encode(&Provider::new(ProviderId(3))), "dr-");
    assert_eq!(
        encode(&Provider::new(ProviderId(4)).with_suburb("Sandton")),
        "dr-sandton"
    );
}

#[test]
fn blank_name_omits_joining_hyphen() {
    let slug = encode(&Provider::new(ProviderId(5)).with_suburb("Sandton"));
    assert_eq!(slug, "dr-sandton");

    let parts = decode(&slug);
    assert_eq!(parts.name, "");
    assert_eq!(parts.suburb, "sandton");
    assert_eq!(parts, decode("dr--sandton"));
}

#[test]
fn encoding_is_deterministic() {
    let p = provider("Nkosi Dlamini", "Umhlanga Rocks");
    let first = encode(&p);
    for _ in 0..5 {
        assert_eq!(encode(&p), first);
    }
}

#[test]
fn identical_name_and_suburb_collide() {
    let a = Provider::new(ProviderId(1))
        .with_display_name("Smith")
        .with_suburb("Sandton")
        .with_profession("GP");
    let b = Provider::new(ProviderId(2))
        .with_display_name("SMITH")
        .with_suburb("sandton")
        .with_profession("Dentist");
    assert_eq!(encode(&a), encode(&b));
}

#[test]
fn segment_keeps_digits() {
    assert_eq!(slugify_segment("Unit 4B"), "unit-4b");
}

// ── Decoding ────────────────────────────────────────────────────────────────

#[test]
fn decodes_last_token_as_suburb() {
    assert_eq!(
        decode("dr-john-smith-sandton"),
        SlugParts {
            name: "john smith".to_string(),
            suburb: "sandton".to_string(),
        }
    );
}

#[test]
fn prefix_is_optional() {
    let parts = decode("smith-sandton");
    assert_eq!(parts.name, "smith");
    assert_eq!(parts.suburb, "sandton");
}

#[test]
fn single_token_is_suburb_candidate() {
    let parts = decode("dr-smith");
    assert_eq!(parts.name, "");
    assert_eq!(parts.suburb, "smith");
}

#[test]
fn hyphenated_suburb_is_split_heuristically() {
    // Known ambiguity: "sandton-central" cannot be told apart from a name token.
    let parts = decode("dr-smith-sandton-central");
    assert_eq!(parts.name, "smith sandton");
    assert_eq!(parts.suburb, "central");
}

#[test]
fn malformed_input_never_panics() {
    for input in ["", "-", "dr-", "---", "dr--", "ünïcode-slug", "dr-a-"] {
        let _ = decode(input);
    }
    assert_eq!(decode(""), SlugParts::default());
    assert_eq!(decode("dr-"), SlugParts::default());
}
