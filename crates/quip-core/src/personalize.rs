//! Name substitution for personalised jokes.

/// The name every provider joke is written about.
pub const CANONICAL_NAME: &str = "Chuck Norris";

/// Replace the canonical name in `content` with `name`.
///
/// Title-case occurrences take `name` verbatim; all-lowercase and
/// all-uppercase occurrences take `name` lowered or uppered to match. Content
/// without any form of the canonical name comes back unchanged.
///
/// A bare trailing apostrophe left behind by a possessive such as
/// `Chuck Norris'` becomes `'s`, unless `name` itself ends in `s`.
pub fn personalize(content: &str, name: &str) -> String {
  let lower = CANONICAL_NAME.to_lowercase();
  let upper = CANONICAL_NAME.to_uppercase();

  if !(content.contains(CANONICAL_NAME)
    || content.contains(&lower)
    || content.contains(&upper))
  {
    return content.to_owned();
  }

  let out = content
    .replace(CANONICAL_NAME, name)
    .replace(&lower, &name.to_lowercase())
    .replace(&upper, &name.to_uppercase());

  if name.ends_with('s') {
    return out;
  }

  let bare = format!("{name}' ");
  if out.contains(&bare) {
    out.replace(&bare, &format!("{name}'s "))
  } else {
    out
  }
}
