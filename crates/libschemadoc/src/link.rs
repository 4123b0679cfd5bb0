use crate::index::SchemaIndex;

/// Characters a wrapper modifier contributes to a canonical signature.
const MODIFIER_CHARS: [char; 3] = ['[', ']', '!'];

/// Resolves a canonical signature into a signature whose named portion is
/// hyperlinked to the type's definition anchor.
///
/// The bare leaf name is recovered by stripping all modifier characters
/// from the signature. If the index knows the name, the bare-name substring
/// is replaced in place (modifiers left intact) with an anchor link to
/// `#<category>-<name>`; otherwise the signature is returned unchanged.
/// This path never fails: an unknown name denotes a built-in scalar.
///
/// Precondition: type names contain none of `[`, `]`, `!`. Upstream schemas
/// use alphanumeric names but never enforce this; a name containing a
/// modifier character would mis-resolve here.
pub fn link_signature(signature: &str, index: &SchemaIndex) -> String {
    let bare_name = signature.replace(MODIFIER_CHARS, "");
    match index.kind_of(&bare_name) {
        Some(category) => signature.replacen(
            &bare_name,
            &format!(
                "<a href='#{anchor}'>{bare_name}</a>",
                anchor = category.anchor(&bare_name),
            ),
            1,
        ),
        None => signature.to_string(),
    }
}
