use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";
const MASK: &str = "***";

/// Parameter names that carry the user's credentials.
pub(crate) fn is_credential(name: &str) -> bool {
    name.eq_ignore_ascii_case("usr") || name.eq_ignore_ascii_case("psw")
}

/// Builds a SOAP 1.1 request envelope calling `operation` with `message` as its parameters, in order.
pub(crate) fn build_envelope(
    namespace: &str,
    operation: &str,
    message: &[(&str, String)],
) -> Result<String, quick_xml::Error> {
    write_envelope(namespace, operation, message, false)
}

/// Same envelope as [build_envelope] with credential values masked, for logging.
pub(crate) fn build_masked_envelope(
    namespace: &str,
    operation: &str,
    message: &[(&str, String)],
) -> Result<String, quick_xml::Error> {
    write_envelope(namespace, operation, message, true)
}

fn write_envelope(
    namespace: &str,
    operation: &str,
    message: &[(&str, String)],
    mask_credentials: bool,
) -> Result<String, quick_xml::Error> {
    let mut writer = Writer::new(Vec::new());

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("soap:Envelope").with_attributes([
        ("xmlns:xsi", XSI_NS),
        ("xmlns:xsd", XSD_NS),
        ("xmlns:soap", SOAP_ENVELOPE_NS),
    ])))?;
    writer.write_event(Event::Start(BytesStart::new("soap:Body")))?;

    let call = BytesStart::new(operation).with_attributes([("xmlns", namespace)]);
    if message.is_empty() {
        writer.write_event(Event::Empty(call))?;
    } else {
        writer.write_event(Event::Start(call))?;
        for (name, value) in message {
            let value = if mask_credentials && is_credential(name) {
                MASK
            } else {
                value.as_str()
            };

            writer.write_event(Event::Start(BytesStart::new(*name)))?;
            writer.write_event(Event::Text(BytesText::new(value)))?;
            writer.write_event(Event::End(BytesEnd::new(*name)))?;
        }
        writer.write_event(Event::End(BytesEnd::new(operation)))?;
    }

    writer.write_event(Event::End(BytesEnd::new("soap:Body")))?;
    writer.write_event(Event::End(BytesEnd::new("soap:Envelope")))?;

    // Every piece written above comes from &str
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}
