//! Documentation link body parser.
//!
//! ```text
//! link := [ class_name ] [ "#" member_name [ "(" parameters ")" ] ]
//! ```
//!
//! Missing package or class are taken from the context member, so `#foo`
//! inside the docs of `Lpkg/Owner;->m()V` means `pkg.Owner#foo`. The
//! parameter text is kept verbatim.

use crate::base::Cursor;
use crate::parser::errors::{ErrorCode, LinkSyntaxError};
use crate::syntax::{MemberReference, split_qualified_name};

/// Parse the body of a `{@link ...}` tag relative to `context`.
pub fn parse_link(body: &str, context: &MemberReference) -> Result<MemberReference, LinkSyntaxError> {
    let mut cursor = Cursor::new(body);

    let class_text = match cursor.find('#') {
        Some(hash) => cursor
            .next_n(hash)
            .map_err(|e| LinkSyntaxError::end_of_input(&cursor, e))?,
        None => cursor.next_rest(),
    };

    let (package, class) = match split_qualified_name(class_text) {
        ("", "") => (context.package(), context.class_name()),
        (package, "") => (package, context.class_name()),
        ("", class) => (context.package(), class),
        qualified => qualified,
    };

    if !cursor.has_next() {
        return Ok(MemberReference::class(package, class));
    }
    cursor
        .next()
        .map_err(|e| LinkSyntaxError::end_of_input(&cursor, e))?;

    let Some(open) = cursor.find('(') else {
        let member = cursor.next_rest();
        return Ok(MemberReference::new(package, class, member, String::new()));
    };

    let member = cursor
        .next_n(open)
        .map_err(|e| LinkSyntaxError::end_of_input(&cursor, e))?;
    cursor
        .next()
        .map_err(|e| LinkSyntaxError::end_of_input(&cursor, e))?;

    let Some(close) = cursor.find(')') else {
        return Err(LinkSyntaxError::with_default_message(&cursor, ErrorCode::E0201));
    };
    let parameters = cursor
        .next_n(close)
        .map_err(|e| LinkSyntaxError::end_of_input(&cursor, e))?;
    cursor
        .next()
        .map_err(|e| LinkSyntaxError::end_of_input(&cursor, e))?;

    Ok(MemberReference::new(package, class, member, parameters))
}
