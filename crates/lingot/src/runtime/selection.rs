use crate::types::{TranslationMessage, TranslationSpecifier};

/// Whether `message` may answer `request` at all.
///
/// A message with a gender only answers requests for that gender. A message
/// with a count range only answers requests with no count or a count inside
/// the range. Every attribute the message declares must be absent from the
/// request or carry the same value.
pub fn is_candidate(message: &TranslationMessage, request: &TranslationSpecifier) -> bool {
    let gender_ok = message.gender.is_none() || message.gender == request.gender;

    let count_ok = match (message.count_range, request.count) {
        (Some(range), Some(count)) => range.contains(count),
        _ => true,
    };

    let attributes_ok = message
        .attributes
        .iter()
        .all(|(key, value)| request.attributes.get(key).is_none_or(|wanted| wanted == value));

    gender_ok && count_ok && attributes_ok
}

/// How closely `message` fits `request`: one point per attribute the request
/// also asks for, one for a count range and one for a gender.
pub fn specificity(message: &TranslationMessage, request: &TranslationSpecifier) -> usize {
    let matching_attributes = message
        .attributes
        .iter()
        .filter(|(key, value)| request.attributes.get(*key) == Some(*value))
        .count();

    matching_attributes
        + usize::from(message.count_range.is_some())
        + usize::from(message.gender.is_some())
}

/// The highest-scoring message. The first one wins a tie.
pub fn most_specific<'a>(
    candidates: &[&'a TranslationMessage],
    request: &TranslationSpecifier,
) -> Option<&'a TranslationMessage> {
    let mut best: Option<(&TranslationMessage, usize)> = None;

    for &message in candidates {
        let score = specificity(message, request);
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((message, score)),
        }
    }

    best.map(|(message, _)| message)
}
