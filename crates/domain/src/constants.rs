//! Vendor protocol constants
//!
//! Element names, namespaces and status literals come from the InterCall
//! owner API WSDL and must be reproduced byte for byte. The casing is not
//! consistent across operations; do not normalise it.

// Namespaces
pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const OWNER_API_NS: &str = "http://intercall.com/ownerAPI";
pub const COMMON_NS: &str = "http://intercall.com/common";

// Request elements
pub const RETRIEVE_OWNER_REQUEST: &str = "retrieve-owner-request";
pub const ADD_OWNER_REQUEST: &str = "add-owner-request";
pub const UPDATE_OWNER_REQUEST: &str = "update-owner-request";
pub const STOP_ACTIVITY_OWNER_REQUEST: &str = "stop-activity-owner-request";
pub const DELETE_OWNER_REQUEST: &str = "delete-owner-request";
pub const RETRIEVE_DIALIN_NUMBERS_REQUEST: &str = "retrieveDialinNumbersRequest";

// SOAPAction header values
pub const ACTION_RETRIEVE_OWNER: &str = "retrieveOwner";
pub const ACTION_CREATE_OWNER: &str = "createOwner";
pub const ACTION_STOP_OWNER_ACTIVITY: &str = "stopOwnerActivity";
pub const ACTION_DELETE_OWNER: &str = "deleteOwner";
pub const ACTION_GET_DIAL_IN_NUMBERS: &str = "getDialInNumbers";

// Response elements
pub const OWNER_SERVICE_RESPONSE: &str = "response-intercall-owner-service";
pub const STOP_ACTIVITY_OWNER_RESPONSE: &str = "stop-activity-owner-response";
pub const DELETE_OWNER_RESPONSE: &str = "delete-owner-response-service";
pub const RETRIEVE_DIALIN_NUMBERS_RESPONSE: &str = "retrieveDialinNumbersResponse";

// Status literals (case-sensitive)
pub const STATUS_ERROR: &str = "error";
pub const STATUS_DISABLED: &str = "disabled";
pub const STATUS_ENABLED: &str = "enabled";
pub const STATUS_DELETE_SUCCESSFUL: &str = "Delete Successful";

// Dial-in lookup
pub const DEFAULT_AUDIO_PRODUCT: &str = "RESPLUS";
pub const LOCAL_DIAL_IN_LABEL: &str = "Local Dial-In Numbers Dial-In #";
pub const TOLL_FREE_DIAL_IN_LABEL: &str = "International Toll-Free Dial-In Number(s)";
/// Sections before this index carry product headers, not number records
pub const FIRST_NUMBER_SECTION: usize = 2;

/// Number of phone numbers the vendor provisions per owner
pub const NUMBERS_PER_OWNER: usize = 2;

/// Category every audit record is tagged with
pub const AUDIT_CATEGORY: &str = "conference";

// Transport
pub const SOAP_CONTENT_TYPE: &str = "text/xml;charset=UTF-8";
pub const DEFAULT_USER_AGENT: &str = concat!("intercall-client/", env!("CARGO_PKG_VERSION"));
