use super::common::*;
use crate::moderation::IssueTag;

#[test]
fn clean_review_has_no_issues() {
    let check = moderator().check("Great doctor! Very professional and caring.");

    assert!(check.is_clean);
    assert!(check.issues.is_empty());
    assert_eq!(check.censored_text, "Great doctor! Very professional and caring.");
}

#[test]
fn single_word_is_too_short() {
    let check = moderator().check("Good");
    assert_eq!(check.issues, vec![IssueTag::TooShort]);
}

#[test]
fn whitespace_padding_does_not_count_as_words() {
    let check = moderator().check("   Good   \n\t ");
    assert_eq!(check.issues, vec![IssueTag::TooShort]);
}

#[test]
fn length_limit_counts_characters() {
    let moderator = moderator();

    let at_limit = moderator.check(&long_comment(2000));
    assert!(!at_limit.issues.contains(&IssueTag::TooLong));

    let over_limit = moderator.check(&long_comment(2001));
    assert!(over_limit.issues.contains(&IssueTag::TooLong));

    let accented: String = std::iter::repeat('é').take(2000).collect();
    assert!(!moderator.check(&accented).issues.contains(&IssueTag::TooLong));
}

#[test]
fn short_shouting_is_not_all_caps() {
    let check = moderator().check("MBBS MD FRCS");
    assert!(check.is_clean, "acronyms under 21 chars pass: {:?}", check.issues);
}

#[test]
fn all_caps_needs_more_than_twenty_characters() {
    let moderator = moderator();

    let twenty = "ABCDEFGHIJ KLMNOPQRS";
    assert_eq!(twenty.chars().count(), 20);
    assert!(moderator.check(twenty).is_clean);

    let twenty_one = "ABCDEFGHIJ KLMNOPQRST";
    assert_eq!(moderator.check(twenty_one).issues, vec![IssueTag::AllCaps]);
}

#[test]
fn long_shouting_is_all_caps() {
    let check = moderator().check("TERRIBLE TERRIBLE TERRIBLE DOCTOR!!!");
    assert!(check.issues.contains(&IssueTag::AllCaps));
    // Four tokens is below the repetition floor.
    assert!(!check.issues.contains(&IssueTag::Repetitive));
}

#[test]
fn repeated_words_are_flagged() {
    let check = moderator().check("bad bad bad bad bad bad bad doctor");
    assert_eq!(check.issues, vec![IssueTag::Repetitive]);
}

#[test]
fn links_are_flagged_case_insensitively() {
    let moderator = moderator();
    for text in [
        "Book at HTTPS://clinic.example today",
        "Details on http://example.com please",
        "Check out my website www.spam.com",
    ] {
        let check = moderator.check(text);
        assert!(check.issues.contains(&IssueTag::ContainsUrl), "{text}");
    }
}

#[test]
fn profanity_is_reported_and_censored() {
    let check = moderator().check("This doctor is a fucking fraud!");

    assert_eq!(check.issues, vec![IssueTag::ContainsProfanity]);
    assert_eq!(check.censored_text, "This doctor is a **** fraud!");
}

#[test]
fn checks_do_not_short_circuit() {
    let text = "SPAM SPAM SPAM SPAM SPAM SPAM WWW.SPAM.COM";
    let check = moderator().check(text);

    assert_eq!(
        check.issues,
        vec![IssueTag::AllCaps, IssueTag::Repetitive, IssueTag::ContainsUrl]
    );
}
