//! STS XML deserialization: parsing Query-protocol response bodies into Rust types.
//!
//! This module provides the [`StsDeserialize`] trait and its implementations for
//! the success and error documents STS returns. Elements are matched by local
//! name and by nesting; unknown elements are skipped.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use ruststs_model::{
    ErrorDetail, ErrorEnvelope, FederatedUser, FederationTokenResult, TemporaryCredentials,
};

use crate::error::XmlError;

/// Trait for deserializing STS types from XML.
///
/// Implementors parse XML elements from the reader and populate the struct fields.
/// The root element has already been consumed by the caller; the implementation
/// reads child elements until the matching end tag.
pub trait StsDeserialize: Sized {
    /// Deserialize an instance from the given XML reader.
    ///
    /// The reader is positioned just after the opening tag of this element.
    /// The implementation should read all child content and return when
    /// the matching end tag is consumed.
    ///
    /// # Errors
    ///
    /// Returns `XmlError` if the XML is malformed or required fields are missing.
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError>;
}

/// Deserialize an STS XML document into a typed value.
///
/// Finds the root element and delegates to the type's `StsDeserialize` implementation.
/// The root element's name is not checked.
///
/// # Errors
///
/// Returns `XmlError` if the XML is malformed or deserialization fails.
pub fn from_xml<T: StsDeserialize>(xml: &[u8]) -> Result<T, XmlError> {
    let mut reader = Reader::from_reader(xml);

    // Skip the XML declaration and find the root element.
    loop {
        match reader.read_event()? {
            Event::Start(_) => {
                return T::deserialize_xml(&mut reader);
            }
            Event::Eof => {
                return Err(XmlError::MissingElement("root element".to_string()));
            }
            // Skip declaration, comments, processing instructions, whitespace.
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Helper functions for reading common XML patterns
// ---------------------------------------------------------------------------

/// Local name of an element, without any namespace prefix.
fn local_name(e: &BytesStart<'_>) -> Result<String, XmlError> {
    let name = e.local_name();
    std::str::from_utf8(name.as_ref())
        .map(ToOwned::to_owned)
        .map_err(|e| XmlError::ParseError(e.to_string()))
}

/// Read the text content of the current element and consume its end tag.
///
/// Expects the reader to be positioned right after a `Start` event. Entity and
/// character references are resolved; surrounding whitespace is kept.
fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&decoded);
            }
            Event::CData(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&decoded);
            }
            Event::GeneralRef(e) => {
                if let Some(ch) = e
                    .resolve_char_ref()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?
                {
                    text.push(ch);
                } else {
                    let name = e
                        .decode()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    let resolved = quick_xml::escape::resolve_predefined_entity(&name)
                        .ok_or_else(|| XmlError::ParseError(format!("unknown entity &{name};")))?;
                    text.push_str(resolved);
                }
            }
            Event::Start(_) => skip_element(reader)?,
            Event::End(_) => {
                return Ok(text);
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while reading text content".to_string(),
                ));
            }
            _ => {}
        }
    }
}

/// Skip over an element and all its children.
fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), XmlError> {
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while skipping element".to_string(),
                ));
            }
            _ => {}
        }
    }
}

/// A child element handed out by [`for_each_child`].
///
/// A self-closing child (`<Name/>`) has no content and no end tag, so every
/// accessor returns the empty value without touching the reader.
struct Child {
    name: String,
    empty: bool,
}

impl Child {
    fn name(&self) -> &str {
        &self.name
    }

    /// Text content of the child; empty for a self-closing element.
    fn text(&self, reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
        if self.empty {
            Ok(String::new())
        } else {
            read_text_content(reader)
        }
    }

    /// Deserialize the child as `T`; a self-closing element yields `T::default()`.
    fn read<T: StsDeserialize + Default>(&self, reader: &mut Reader<&[u8]>) -> Result<T, XmlError> {
        if self.empty {
            Ok(T::default())
        } else {
            T::deserialize_xml(reader)
        }
    }

    /// Walk the grandchildren, if any.
    fn for_each<F>(&self, reader: &mut Reader<&[u8]>, on_child: F) -> Result<(), XmlError>
    where
        F: FnMut(&mut Reader<&[u8]>, &Child) -> Result<(), XmlError>,
    {
        if self.empty {
            Ok(())
        } else {
            for_each_child(reader, &self.name, on_child)
        }
    }

    fn skip(&self, reader: &mut Reader<&[u8]>) -> Result<(), XmlError> {
        if self.empty {
            Ok(())
        } else {
            skip_element(reader)
        }
    }
}

/// Walk the children of the current element, handing each one to `on_child`.
///
/// `on_child` must consume the child through one of the [`Child`] accessors.
/// Returns once the current element's end tag is read.
fn for_each_child<F>(
    reader: &mut Reader<&[u8]>,
    context: &str,
    mut on_child: F,
) -> Result<(), XmlError>
where
    F: FnMut(&mut Reader<&[u8]>, &Child) -> Result<(), XmlError>,
{
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let child = Child {
                    name: local_name(&e)?,
                    empty: false,
                };
                on_child(reader, &child)?;
            }
            Event::Empty(e) => {
                let child = Child {
                    name: local_name(&e)?,
                    empty: true,
                };
                on_child(reader, &child)?;
            }
            Event::End(_) => return Ok(()),
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(format!(
                    "unexpected EOF in {context}"
                )));
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// StsDeserialize implementations for success documents
// ---------------------------------------------------------------------------

impl StsDeserialize for TemporaryCredentials {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut creds = TemporaryCredentials::default();

        for_each_child(reader, "Credentials", |reader, child| {
            match child.name() {
                "SessionToken" => creds.session_token = child.text(reader)?,
                "SecretAccessKey" => creds.secret_access_key = child.text(reader)?,
                "Expiration" => creds.expiration = child.text(reader)?,
                "AccessKeyId" => creds.access_key_id = child.text(reader)?,
                _ => child.skip(reader)?,
            }
            Ok(())
        })?;

        Ok(creds)
    }
}

impl StsDeserialize for FederatedUser {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut user = FederatedUser::default();

        for_each_child(reader, "FederatedUser", |reader, child| {
            match child.name() {
                "Arn" => user.arn = child.text(reader)?,
                "FederatedUserId" => user.federated_user_id = child.text(reader)?,
                _ => child.skip(reader)?,
            }
            Ok(())
        })?;

        Ok(user)
    }
}

/// Read the `RequestId` out of a `ResponseMetadata` element.
fn read_response_metadata(
    reader: &mut Reader<&[u8]>,
    metadata: &Child,
) -> Result<String, XmlError> {
    let mut request_id = String::new();

    metadata.for_each(reader, |reader, child| {
        match child.name() {
            "RequestId" => request_id = child.text(reader)?,
            _ => child.skip(reader)?,
        }
        Ok(())
    })?;

    Ok(request_id)
}

impl StsDeserialize for FederationTokenResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut request_id = String::new();
        let mut credentials = TemporaryCredentials::default();
        let mut federated_user = FederatedUser::default();
        let mut found_result = false;

        for_each_child(reader, "GetFederationTokenResponse", |reader, child| {
            match child.name() {
                "ResponseMetadata" => request_id = read_response_metadata(reader, child)?,
                "GetFederationTokenResult" => {
                    found_result = true;
                    child.for_each(reader, |reader, child| {
                        match child.name() {
                            "Credentials" => credentials = child.read(reader)?,
                            "FederatedUser" => federated_user = child.read(reader)?,
                            _ => child.skip(reader)?,
                        }
                        Ok(())
                    })?;
                }
                _ => child.skip(reader)?,
            }
            Ok(())
        })?;

        if !found_result {
            return Err(XmlError::MissingElement(
                "GetFederationTokenResult".to_string(),
            ));
        }

        Ok(FederationTokenResult {
            request_id,
            credentials,
            federated_user,
        })
    }
}

// ---------------------------------------------------------------------------
// StsDeserialize implementations for error documents
// ---------------------------------------------------------------------------

impl StsDeserialize for ErrorDetail {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut detail = ErrorDetail::default();

        for_each_child(reader, "Error", |reader, child| {
            match child.name() {
                "Code" => detail.code = child.text(reader)?,
                "Message" => detail.message = child.text(reader)?,
                "RequestID" | "RequestId" => detail.request_id = child.text(reader)?,
                _ => child.skip(reader)?,
            }
            Ok(())
        })?;

        Ok(detail)
    }
}

impl StsDeserialize for ErrorEnvelope {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut envelope = ErrorEnvelope::default();

        for_each_child(reader, "error response", |reader, child| {
            match child.name() {
                "RequestID" | "RequestId" => envelope.request_id = child.text(reader)?,
                "Error" => envelope.errors.push(child.read(reader)?),
                "Errors" => child.for_each(reader, |reader, child| {
                    match child.name() {
                        "Error" => envelope.errors.push(child.read(reader)?),
                        _ => child.skip(reader)?,
                    }
                    Ok(())
                })?,
                _ => child.skip(reader)?,
            }
            Ok(())
        })?;

        Ok(envelope)
    }
}
