//! Request bodies for owner-level writes and lookups

use intercall_domain::{ActivityOptions, NumberType, OwnerFields, PhoneNumber};

use crate::soap::envelope::BodyNode;

fn owner_info(fields: &OwnerFields, full: bool) -> BodyNode {
    let values = if full { fields.allow_listed() } else { fields.snapshot() };
    BodyNode::parent(
        "owner-info",
        values.into_iter().map(|(field, value)| BodyNode::text(field.wire_name(), value)).collect(),
    )
}

/// `retrieve-owner-request` body.
pub fn retrieve(owner_number: &str) -> Vec<BodyNode> {
    vec![BodyNode::text("owner-number", owner_number)]
}

/// `add-owner-request` body. Carries every allow-listed field, including
/// `pac-code` and `web-pin`.
pub fn add(fields: &OwnerFields) -> Vec<BodyNode> {
    vec![BodyNode::parent("add-owner", vec![owner_info(fields, true)])]
}

/// `update-owner-request` body resubmitting the snapshot.
pub fn update(owner_number: &str, fields: &OwnerFields) -> Vec<BodyNode> {
    vec![
        BodyNode::text("owner-number", owner_number),
        BodyNode::parent("update-owner", vec![owner_info(fields, false)]),
    ]
}

/// Snapshot plus an `add-numbers` directive for `number_type`.
pub fn add_number(owner_number: &str, fields: &OwnerFields, number_type: NumberType) -> Vec<BodyNode> {
    vec![
        BodyNode::text("owner-number", owner_number),
        BodyNode::parent(
            "update-owner",
            vec![
                owner_info(fields, false),
                BodyNode::empty("add-numbers").with_attribute("number-type", number_type.to_string()),
            ],
        ),
    ]
}

/// Snapshot plus a `delete-numbers` directive for one number.
pub fn delete_number(fields: &OwnerFields, number: &PhoneNumber) -> Vec<BodyNode> {
    vec![
        BodyNode::text("owner-number", &number.owner_number),
        BodyNode::parent(
            "update-owner",
            vec![
                owner_info(fields, false),
                BodyNode::parent("delete-numbers", vec![BodyNode::text("number", &number.number)])
                    .with_attribute("number-type", number.type_literal.clone()),
            ],
        ),
    ]
}

/// `stop-activity-owner-request` body: options first, then the owner.
pub fn stop_activity(owner_number: &str, options: &ActivityOptions) -> Vec<BodyNode> {
    let mut body: Vec<BodyNode> =
        options.elements().into_iter().map(|(name, value)| BodyNode::text(name, value)).collect();
    body.push(BodyNode::text("owner-number", owner_number));
    body
}

/// `delete-owner-request` body. `terminationNote` is omitted when absent.
pub fn delete(owner_number: &str, termination_note: Option<&str>) -> Vec<BodyNode> {
    let mut children = vec![BodyNode::text("owner-number", owner_number)];
    if let Some(note) = termination_note {
        children.push(BodyNode::text("terminationNote", note));
    }
    vec![BodyNode::parent("delete-owner", children)]
}
