#[cfg(test)]
mod tests {
    use crate::api::models::*;
    use crate::api::InfobloxError;
    use serde_json::json;

    #[test]
    fn test_record_type_from_str() {
        assert_eq!("CNAME".parse::<RecordType>().unwrap(), RecordType::Cname);
        assert_eq!("Txt".parse::<RecordType>().unwrap(), RecordType::Txt);
        assert_eq!("host".parse::<RecordType>().unwrap(), RecordType::Host);
        assert!(matches!(
            "mx".parse::<RecordType>(),
            Err(InfobloxError::InvalidRecordType(t)) if t == "mx"
        ));
    }

    #[test]
    fn test_search_field() {
        assert_eq!(RecordType::Cname.search_field(), "canonical");
        assert_eq!(RecordType::Txt.search_field(), "name");
        assert_eq!(RecordType::Host.search_field(), "name");
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let record = Record::txt("_acme-challenge.example.com", "token").with_view("external");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "name": "_acme-challenge.example.com",
                "text": "token",
                "view": "external"
            })
        );

        assert_eq!(serde_json::to_value(Record::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_reference_uses_wire_name() {
        let record: Record = serde_json::from_value(json!({
            "_ref": "record:txt/ZG5z:t.example.com/default",
            "name": "t.example.com",
            "configure_for_dns": true
        }))
        .unwrap();
        assert_eq!(
            record.reference.as_deref(),
            Some("record:txt/ZG5z:t.example.com/default")
        );
        assert_eq!(record.configure_for_dns, Some(true));
        assert!(record.ipv4addrs.is_empty());

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["_ref"], "record:txt/ZG5z:t.example.com/default");
    }

    #[test]
    fn test_ipv4addr_entry_requires_address() {
        let entry: Result<Ipv4AddrEntry, _> =
            serde_json::from_value(json!({ "host": "web.example.com" }));
        assert!(entry.is_err());

        assert_eq!(
            serde_json::to_value(Ipv4AddrEntry::new("10.0.0.1")).unwrap(),
            json!({ "ipv4addr": "10.0.0.1" })
        );
    }
}
