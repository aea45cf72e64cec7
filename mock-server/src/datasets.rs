//! Canned ASMX responses, shaped like the ones the e-Pak service sends.

/// A table of a dataset: its name and rows of column/value pairs.
pub type Table<'a> = (&'a str, &'a [&'a [(&'a str, &'a str)]]);

const ENVELOPE_START: &str = r#"<?xml version="1.0" encoding="utf-8"?><soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema"><soap:Body>"#;
const ENVELOPE_END: &str = "</soap:Body></soap:Envelope>";

/// A `<operation>Response` holding a dataset with the given tables. Tables without rows are declared in the
/// schema but missing from the DiffGram; a dataset with no rows at all has an empty DiffGram.
pub fn dataset_response(operation: &str, dataset_id: &str, tables: &[Table]) -> String {
    let mut xml = ENVELOPE_START.to_string();
    xml.push_str(&format!(
        r##"<{operation}Response xmlns="#Oca_e_Pak"><{operation}Result>"##
    ));
    xml.push_str(&schema(dataset_id, tables));

    xml.push_str(r#"<diffgr:diffgram xmlns:msdata="urn:schemas-microsoft-com:xml-msdata" xmlns:diffgr="urn:schemas-microsoft-com:xml-diffgram-v1">"#);
    if tables.iter().any(|(_, rows)| !rows.is_empty()) {
        xml.push_str(&format!(r#"<{dataset_id} xmlns="">"#));
        for (name, rows) in tables {
            for (index, row) in rows.iter().enumerate() {
                let number = index + 1;
                xml.push_str(&format!(
                    r#"<{name} diffgr:id="{name}{number}" msdata:rowOrder="{index}">"#
                ));
                for (column, value) in row.iter() {
                    xml.push_str(&format!("<{column}>{value}</{column}>"));
                }
                xml.push_str(&format!("</{name}>"));
            }
        }
        xml.push_str(&format!("</{dataset_id}>"));
    }
    xml.push_str("</diffgr:diffgram>");

    xml.push_str(&format!("</{operation}Result></{operation}Response>"));
    xml.push_str(ENVELOPE_END);
    xml
}

/// The error dataset the service answers with when it rejects a request.
pub fn error_response(operation: &str, description: &str) -> String {
    dataset_response(
        operation,
        "Errores",
        &[("Error", &[&[("Description", description)]])],
    )
}

pub fn fault_response(fault_string: &str) -> String {
    let mut xml = ENVELOPE_START.to_string();
    xml.push_str(&format!(
        "<soap:Fault><faultcode>soap:Client</faultcode><faultstring>{fault_string}</faultstring><detail /></soap:Fault>"
    ));
    xml.push_str(ENVELOPE_END);
    xml
}

fn schema(dataset_id: &str, tables: &[Table]) -> String {
    let mut xml = format!(
        r#"<xs:schema id="{dataset_id}" xmlns="" xmlns:xs="http://www.w3.org/2001/XMLSchema" xmlns:msdata="urn:schemas-microsoft-com:xml-msdata">"#
    );
    xml.push_str(&format!(
        r#"<xs:element name="{dataset_id}" msdata:IsDataSet="true" msdata:UseCurrentLocale="true"><xs:complexType><xs:choice minOccurs="0" maxOccurs="unbounded">"#
    ));

    for (name, rows) in tables {
        xml.push_str(&format!(
            r#"<xs:element name="{name}"><xs:complexType><xs:sequence>"#
        ));
        if let Some(row) = rows.first() {
            for (column, _) in row.iter() {
                xml.push_str(&format!(
                    r#"<xs:element name="{column}" type="xs:string" minOccurs="0" />"#
                ));
            }
        }
        xml.push_str("</xs:sequence></xs:complexType></xs:element>");
    }

    xml.push_str("</xs:choice></xs:complexType></xs:element></xs:schema>");
    xml
}
