error_chain! {
    types {
        Error, ErrorKind, ResultExt, Result;
    }

    errors {
        Decode(msg: String) {
            description("DecodeError")
            display("DecodeError: '{}'", msg)
        }
        SchemaMismatch(path: String, msg: String) {
            description("SchemaMismatchError")
            display("SchemaMismatchError at '{}': {}", path, msg)
        }
        UnknownEnumValue(path: String, value: String) {
            description("UnknownEnumValueError")
            display("UnknownEnumValueError at '{}': unrecognized value '{}'", path, value)
        }
    }

    foreign_links {
        Json(serde_json::Error);
    }

}
