//! One-shot page wrapper around the whole document.

use crate::filter::FilterResult;
use crate::options::WrapperTemplate;
use markdown::mdast::{Html, Node, Root};

/// Whether the current run has already wrapped its document.
///
/// Create a fresh state for every document-processing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapState {
    /// Header and footer not injected yet.
    #[default]
    Unwrapped,
    /// Header and footer injected; later document visits are no-ops.
    Wrapped,
}

impl WrapState {
    /// Returns true once the document has been wrapped.
    pub fn is_wrapped(self) -> bool {
        matches!(self, WrapState::Wrapped)
    }
}

/// Document callback: on the first call of a run, returns the document with
/// the template's header prepended and footer appended. Later calls return
/// [`FilterResult::Unchanged`].
pub fn wrap_document(state: &mut WrapState, root: &Root, template: &WrapperTemplate) -> FilterResult {
    if state.is_wrapped() {
        log::trace!("Document already wrapped; leaving it alone");
        return FilterResult::Unchanged;
    }
    *state = WrapState::Wrapped;

    let mut children = Vec::with_capacity(root.children.len() + 2);
    children.push(raw(template.header()));
    children.extend(root.children.iter().cloned());
    children.push(raw(template.footer().to_string()));

    log::debug!("Wrapped document of {} blocks", root.children.len());
    FilterResult::Replace(Node::Root(Root {
        children,
        position: root.position.clone(),
    }))
}

fn raw(value: String) -> Node {
    Node::Html(Html {
        value,
        position: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use markdown::mdast::Text;

    fn doc() -> Root {
        Root {
            children: vec![Node::Text(Text {
                value: "body".into(),
                position: None,
            })],
            position: None,
        }
    }

    #[test]
    fn first_call_wraps() {
        let template = WrapperTemplate::default();
        let mut state = WrapState::default();
        let FilterResult::Replace(Node::Root(wrapped)) = wrap_document(&mut state, &doc(), &template)
        else {
            panic!("expected a replaced root");
        };

        assert!(state.is_wrapped());
        assert_eq!(wrapped.children.len(), 3);
        assert_eq!(wrapped.children[0], raw(template.header()));
        assert_eq!(wrapped.children[1], doc().children[0]);
        assert_eq!(wrapped.children[2], raw("</body>\n</html>".to_string()));
    }

    #[test]
    fn second_call_is_a_no_op() {
        let template = WrapperTemplate::default();
        let mut state = WrapState::default();
        let _ = wrap_document(&mut state, &doc(), &template);
        assert_eq!(
            wrap_document(&mut state, &doc(), &template),
            FilterResult::Unchanged
        );
    }

    #[test]
    fn states_do_not_leak_between_runs() {
        let template = WrapperTemplate::default();
        let mut first = WrapState::default();
        let mut second = WrapState::default();
        let _ = wrap_document(&mut first, &doc(), &template);
        assert!(matches!(
            wrap_document(&mut second, &doc(), &template),
            FilterResult::Replace(_)
        ));
    }
}
