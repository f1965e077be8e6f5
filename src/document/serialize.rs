//! HTML serialization of the arena DOM through html5ever's serializer.

use std::collections::VecDeque;
use std::io;

use html5ever::QualName;
use html5ever::serialize::{Serialize, SerializeOpts, Serializer, TraversalScope, serialize};

use super::arena::{ArenaDom, ArenaNodeData, ArenaNodeId};

/// A node of an [`ArenaDom`] that html5ever can serialize.
pub struct SerializableNode<'a> {
    pub dom: &'a ArenaDom,
    pub id: ArenaNodeId,
}

enum SerializeOp {
    Open(ArenaNodeId),
    Close(QualName),
}

impl Serialize for SerializableNode<'_> {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        let mut ops = VecDeque::new();
        match traversal_scope {
            TraversalScope::IncludeNode => ops.push_back(SerializeOp::Open(self.id)),
            TraversalScope::ChildrenOnly(_) => {
                ops.extend(self.dom.children(self.id).map(SerializeOp::Open))
            }
        }

        while let Some(op) = ops.pop_front() {
            let id = match op {
                SerializeOp::Open(id) => id,
                SerializeOp::Close(name) => {
                    serializer.end_elem(name)?;
                    continue;
                }
            };
            let Some(node) = self.dom.get(id) else {
                continue;
            };

            match &node.data {
                ArenaNodeData::Element { name, attrs } => {
                    serializer.start_elem(
                        name.clone(),
                        attrs.iter().map(|a| (&a.name, a.value.as_str())),
                    )?;
                    ops.push_front(SerializeOp::Close(name.clone()));
                    let children: Vec<_> = self.dom.children(id).collect();
                    for child in children.into_iter().rev() {
                        ops.push_front(SerializeOp::Open(child));
                    }
                }
                ArenaNodeData::Text(text) => serializer.write_text(text)?,
                ArenaNodeData::Comment(text) => serializer.write_comment(text)?,
                ArenaNodeData::Doctype { name, .. } => serializer.write_doctype(name)?,
                ArenaNodeData::ProcessingInstruction { target, data } => {
                    serializer.write_processing_instruction(target, data)?
                }
                ArenaNodeData::Document => {
                    ops.extend(self.dom.children(id).map(SerializeOp::Open));
                }
            }
        }
        Ok(())
    }
}

/// Serialize the children of `id` (not `id` itself) to an HTML string.
pub fn serialize_children(dom: &ArenaDom, id: ArenaNodeId) -> io::Result<String> {
    let mut bytes = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    serialize(&mut bytes, &SerializableNode { dom, id }, opts)?;

    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use html5ever::driver::ParseOpts;
    use html5ever::parse_document;
    use html5ever::tendril::TendrilSink;

    use super::super::tree_sink::ArenaSink;
    use super::*;

    fn body_html(html: &str) -> String {
        let dom = parse_document(ArenaSink::new(), ParseOpts::default())
            .from_utf8()
            .one(html.as_bytes())
            .into_dom();
        let body = dom.find_by_tag("body").expect("body");
        serialize_children(&dom, body).expect("serialize")
    }

    #[test]
    fn test_round_trip_simple_fragment() {
        let html = r#"<p class="johdanto">Hei <a href="/x?a=1&amp;b=2">maailma</a></p>"#;
        assert_eq!(body_html(html), html);
    }

    #[test]
    fn test_comments_and_void_elements() {
        assert_eq!(
            body_html("<p>a<br>b</p><!-- huom --><img src=\"k.png\">"),
            "<p>a<br>b</p><!-- huom --><img src=\"k.png\">"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(body_html("<p>1 &lt; 2 &amp; 3</p>"), "<p>1 &lt; 2 &amp; 3</p>");
    }

    #[test]
    fn test_raw_text_is_not_escaped() {
        assert_eq!(
            body_html("<script>if (a < b) {}</script>"),
            "<script>if (a < b) {}</script>"
        );
    }

    #[test]
    fn test_include_node_scope() {
        let dom = parse_document(ArenaSink::new(), ParseOpts::default())
            .from_utf8()
            .one("<ul><li>yksi</li></ul>".as_bytes())
            .into_dom();
        let ul = dom.find_by_tag("ul").expect("ul");

        let mut bytes = Vec::new();
        let opts = SerializeOpts {
            traversal_scope: TraversalScope::IncludeNode,
            ..Default::default()
        };
        serialize(&mut bytes, &SerializableNode { dom: &dom, id: ul }, opts).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "<ul><li>yksi</li></ul>");
    }
}
