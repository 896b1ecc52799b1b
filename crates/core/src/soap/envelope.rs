//! Request envelope construction
//!
//! Owner operations are rendered the way the vendor's WSDL expects: a
//! prefixed `env:Envelope`, and inside the body one operation element with
//! a default namespace and unqualified children. The dial-in lookup uses a
//! different, fully prefixed layout and its own login block.

use std::io::Cursor;

use intercall_domain::constants::{
    ACTION_CREATE_OWNER, ACTION_DELETE_OWNER, ACTION_GET_DIAL_IN_NUMBERS,
    ACTION_RETRIEVE_OWNER, ACTION_STOP_OWNER_ACTIVITY, ADD_OWNER_REQUEST, COMMON_NS,
    DEFAULT_AUDIO_PRODUCT, DELETE_OWNER_REQUEST, DELETE_OWNER_RESPONSE, OWNER_API_NS,
    OWNER_SERVICE_RESPONSE, RETRIEVE_DIALIN_NUMBERS_REQUEST, RETRIEVE_DIALIN_NUMBERS_RESPONSE,
    RETRIEVE_OWNER_REQUEST, SOAP_ENVELOPE_NS, STOP_ACTIVITY_OWNER_REQUEST,
    STOP_ACTIVITY_OWNER_RESPONSE, UPDATE_OWNER_REQUEST, XSD_NS, XSI_NS,
};
use intercall_domain::{ActivityAction, Credentials, IntercallError, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::warn;

const LOGIN_INFO: &str = "login-info";

/// Wire operation exposed by the vendor endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    RetrieveOwner,
    AddOwner,
    UpdateOwner,
    StopActivityOwner(ActivityAction),
    DeleteOwner,
    RetrieveDialInNumbers,
}

impl Operation {
    /// Operation element placed directly inside `Body`.
    pub fn request_element(self) -> &'static str {
        match self {
            Self::RetrieveOwner => RETRIEVE_OWNER_REQUEST,
            Self::AddOwner => ADD_OWNER_REQUEST,
            Self::UpdateOwner => UPDATE_OWNER_REQUEST,
            Self::StopActivityOwner(_) => STOP_ACTIVITY_OWNER_REQUEST,
            Self::DeleteOwner => DELETE_OWNER_REQUEST,
            Self::RetrieveDialInNumbers => RETRIEVE_DIALIN_NUMBERS_REQUEST,
        }
    }

    /// Top-level element expected inside the response `Body`.
    pub fn response_element(self) -> &'static str {
        match self {
            Self::RetrieveOwner | Self::AddOwner | Self::UpdateOwner => OWNER_SERVICE_RESPONSE,
            Self::StopActivityOwner(_) => STOP_ACTIVITY_OWNER_RESPONSE,
            Self::DeleteOwner => DELETE_OWNER_RESPONSE,
            Self::RetrieveDialInNumbers => RETRIEVE_DIALIN_NUMBERS_RESPONSE,
        }
    }

    /// `SOAPAction` header value.
    pub fn soap_action(self) -> &'static str {
        match self {
            Self::RetrieveOwner => ACTION_RETRIEVE_OWNER,
            Self::AddOwner | Self::UpdateOwner => ACTION_CREATE_OWNER,
            Self::StopActivityOwner(_) => ACTION_STOP_OWNER_ACTIVITY,
            Self::DeleteOwner => ACTION_DELETE_OWNER,
            Self::RetrieveDialInNumbers => ACTION_GET_DIAL_IN_NUMBERS,
        }
    }
}

/// Element content of a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeContent {
    Empty,
    Text(String),
    Children(Vec<BodyNode>),
}

/// One element of a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyNode {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub content: NodeContent,
}

impl BodyNode {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), attributes: Vec::new(), content: NodeContent::Text(value.into()) }
    }

    pub fn parent(name: impl Into<String>, children: Vec<BodyNode>) -> Self {
        Self { name: name.into(), attributes: Vec::new(), content: NodeContent::Children(children) }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self { name: name.into(), attributes: Vec::new(), content: NodeContent::Empty }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }
}

/// Renders request envelopes with the account credentials merged in.
#[derive(Debug, Clone)]
pub struct EnvelopeBuilder {
    credentials: Credentials,
}

impl EnvelopeBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    fn login_info(&self) -> BodyNode {
        BodyNode::parent(
            LOGIN_INFO,
            vec![
                BodyNode::text("user-name", &self.credentials.username),
                BodyNode::text("password", &self.credentials.password),
                BodyNode::text("account-number", &self.credentials.account_number),
            ],
        )
    }

    /// Merge `login-info` with caller fields into one top-level element list.
    ///
    /// Caller fields cannot replace `login-info`. Among caller fields, a
    /// repeated name replaces the earlier value in place.
    pub fn merge(&self, fields: Vec<BodyNode>) -> Vec<BodyNode> {
        let mut merged = vec![self.login_info()];
        for field in fields {
            if field.name == LOGIN_INFO {
                warn!("ignoring caller-supplied login-info; credentials come from configuration");
                continue;
            }
            match merged.iter_mut().skip(1).find(|existing| existing.name == field.name) {
                Some(existing) => *existing = field,
                None => merged.push(field),
            }
        }
        merged
    }

    /// Render an owner-API envelope for `operation`.
    ///
    /// # Errors
    /// Returns `IntercallError::InvalidArgument` for the dial-in operation,
    /// which has its own layout (see [`Self::build_dial_in`]), and
    /// `IntercallError::Xml` if rendering fails.
    pub fn build(&self, operation: Operation, fields: Vec<BodyNode>) -> Result<String> {
        if operation == Operation::RetrieveDialInNumbers {
            return Err(IntercallError::InvalidArgument(
                "dial-in lookups are built with build_dial_in".into(),
            ));
        }

        let mut request = BodyNode::parent(operation.request_element(), self.merge(fields))
            .with_attribute("xmlns", OWNER_API_NS);
        if let Operation::StopActivityOwner(action) = operation {
            request = request.with_attribute("action", action.to_string());
        }

        let mut writer = Writer::new(Cursor::new(Vec::new()));
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_error)?;

        let mut envelope = BytesStart::new("env:Envelope");
        envelope.push_attribute(("xmlns:xsd", XSD_NS));
        envelope.push_attribute(("xmlns:xsi", XSI_NS));
        envelope.push_attribute(("xmlns:env", SOAP_ENVELOPE_NS));
        writer.write_event(Event::Start(envelope)).map_err(xml_error)?;
        writer.write_event(Event::Start(BytesStart::new("env:Body"))).map_err(xml_error)?;

        write_node(&mut writer, &request)?;

        writer.write_event(Event::End(BytesEnd::new("env:Body"))).map_err(xml_error)?;
        writer.write_event(Event::End(BytesEnd::new("env:Envelope"))).map_err(xml_error)?;

        into_string(writer)
    }

    /// Render the dial-in number lookup envelope.
    ///
    /// This request carries only user name and password, in the common
    /// namespace, and asks for the `RESPLUS` audio product.
    pub fn build_dial_in(&self, owner_number: &str) -> Result<String> {
        let request = BodyNode::parent(
            format!("own:{RETRIEVE_DIALIN_NUMBERS_REQUEST}"),
            vec![
                BodyNode::parent(
                    format!("own:{LOGIN_INFO}"),
                    vec![
                        BodyNode::text("com:userName", &self.credentials.username),
                        BodyNode::text("com:password", &self.credentials.password),
                    ],
                ),
                BodyNode::parent(
                    "own:dialInCriteria",
                    vec![
                        BodyNode::text("own:owner-number", owner_number),
                        BodyNode::text("own:audioProduct", DEFAULT_AUDIO_PRODUCT),
                    ],
                ),
            ],
        );

        let mut writer = Writer::new(Cursor::new(Vec::new()));
        let mut envelope = BytesStart::new("soapenv:Envelope");
        envelope.push_attribute(("xmlns:soapenv", SOAP_ENVELOPE_NS));
        envelope.push_attribute(("xmlns:own", OWNER_API_NS));
        envelope.push_attribute(("xmlns:com", COMMON_NS));
        writer.write_event(Event::Start(envelope)).map_err(xml_error)?;
        writer.write_event(Event::Empty(BytesStart::new("soapenv:Header"))).map_err(xml_error)?;
        writer.write_event(Event::Start(BytesStart::new("soapenv:Body"))).map_err(xml_error)?;

        write_node(&mut writer, &request)?;

        writer.write_event(Event::End(BytesEnd::new("soapenv:Body"))).map_err(xml_error)?;
        writer.write_event(Event::End(BytesEnd::new("soapenv:Envelope"))).map_err(xml_error)?;

        into_string(writer)
    }
}

fn write_node(writer: &mut Writer<Cursor<Vec<u8>>>, node: &BodyNode) -> Result<()> {
    let mut start = BytesStart::new(node.name.as_str());
    for (key, value) in &node.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    match &node.content {
        NodeContent::Empty => {
            writer.write_event(Event::Empty(start)).map_err(xml_error)?;
        }
        NodeContent::Text(value) => {
            writer.write_event(Event::Start(start)).map_err(xml_error)?;
            writer.write_event(Event::Text(BytesText::new(value))).map_err(xml_error)?;
            writer.write_event(Event::End(BytesEnd::new(node.name.as_str()))).map_err(xml_error)?;
        }
        NodeContent::Children(children) => {
            writer.write_event(Event::Start(start)).map_err(xml_error)?;
            for child in children {
                write_node(writer, child)?;
            }
            writer.write_event(Event::End(BytesEnd::new(node.name.as_str()))).map_err(xml_error)?;
        }
    }
    Ok(())
}

fn into_string(writer: Writer<Cursor<Vec<u8>>>) -> Result<String> {
    String::from_utf8(writer.into_inner().into_inner()).map_err(xml_error)
}

fn xml_error(err: impl std::fmt::Display) -> IntercallError {
    IntercallError::Xml(err.to_string())
}
