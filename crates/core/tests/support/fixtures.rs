//! Vendor-shaped response envelopes

pub fn envelope(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Body>{body}</soap:Body></soap:Envelope>"#
    )
}

/// Number pair as the vendor returns it, codes padded with spaces.
pub const NUMBER_PAIR: &str = r#"<numbers number-type="RESLESSPLUS"><number>8665551234</number><conference-code>5142675386          </conference-code><pin>9715                </pin></numbers><numbers number-type="RESLESSPLUS_INTL"><number>4085550000</number><conference-code>5142675387          </conference-code><pin>9716                </pin></numbers>"#;

pub fn owner_service(status: &str, owner_number: &str, owner_info: &str, numbers: &str) -> String {
    envelope(&format!(
        r#"<ns2:response-intercall-owner-service xmlns:ns2="http://intercall.com/ownerAPI"><status>{status}</status><owner><owner-number>{owner_number}</owner-number><owner-info>{owner_info}</owner-info>{numbers}</owner></ns2:response-intercall-owner-service>"#
    ))
}

pub fn owner_error(message: &str) -> String {
    envelope(&format!(
        r#"<ns2:response-intercall-owner-service xmlns:ns2="http://intercall.com/ownerAPI"><status>error</status><message>{message}</message></ns2:response-intercall-owner-service>"#
    ))
}

pub fn stop_activity(status: &str) -> String {
    envelope(&format!(
        r#"<ns2:stop-activity-owner-response xmlns:ns2="http://intercall.com/ownerAPI"><status>{status}</status></ns2:stop-activity-owner-response>"#
    ))
}

pub fn delete_owner(status: &str) -> String {
    envelope(&format!(
        r#"<ns2:delete-owner-response-service xmlns:ns2="http://intercall.com/ownerAPI"><status>{status}</status></ns2:delete-owner-response-service>"#
    ))
}

pub fn dial_in(sections: &[&[(&str, &str)]]) -> String {
    let sections: String = sections
        .iter()
        .map(|entries| {
            let entries: String = entries
                .iter()
                .map(|(label, number)| {
                    format!(
                        "<dialinNumberInfo><displayLabel>{label}</displayLabel><country>US</country><phoneNumber>{number}</phoneNumber></dialinNumberInfo>"
                    )
                })
                .collect();
            format!("<productDialinNumbersInfo>{entries}</productDialinNumbersInfo>")
        })
        .collect();
    envelope(&format!(
        r#"<ns2:retrieveDialinNumbersResponse xmlns:ns2="http://intercall.com/ownerAPI">{sections}</ns2:retrieveDialinNumbersResponse>"#
    ))
}
