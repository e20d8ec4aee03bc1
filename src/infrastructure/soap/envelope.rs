//! SOAP envelope templating and decoding for `buscaEventosLista`.
//!
//! Responses are deserialized into serde structs. Elements are matched by
//! local name, so the namespace prefixes chosen by the server do not matter.

use std::fmt;

use quick_xml::escape::escape;
use serde::Deserialize;

use crate::domain::entities::{TrackingEvent, TrackingRecord};
use crate::domain::lookup::LookupError;

/// Only the most recent event is requested.
const QUERY_TYPE: &str = "L";
/// Every number in `objetos` is queried.
const RESULT_SCOPE: &str = "T";
/// Portuguese.
const LANGUAGE: &str = "101";

/// Credentials embedded in every request envelope.
#[derive(Clone)]
pub struct SoapCredentials {
    pub user: String,
    pub password: String,
}

impl SoapCredentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }
}

impl Default for SoapCredentials {
    fn default() -> Self {
        Self::new("ECT", "SRO")
    }
}

impl fmt::Debug for SoapCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoapCredentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Builds the request envelope for a single tracking number.
pub fn build_request(credentials: &SoapCredentials, tracking_number: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:ns1="http://resource.webservice.correios.com.br/">
	<SOAP-ENV:Body>
		<ns1:buscaEventosLista>
			<usuario>{user}</usuario>
			<senha>{password}</senha>
			<tipo>{QUERY_TYPE}</tipo>
			<resultado>{RESULT_SCOPE}</resultado>
			<lingua>{LANGUAGE}</lingua>
			<objetos>{number}</objetos>
		</ns1:buscaEventosLista>
	</SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#,
        user = escape(credentials.user.as_str()),
        password = escape(credentials.password.as_str()),
        number = escape(tracking_number),
    )
}

/// Decoded content of a response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoapReply {
    Fault {
        code: String,
        message: String,
        detail: String,
    },
    Record(TrackingRecord),
    /// Well-formed document with neither a fault nor a tracking record.
    Empty,
}

#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(rename = "Body", default)]
    body: Body,
}

#[derive(Debug, Default, Deserialize)]
struct Body {
    #[serde(rename = "Fault")]
    fault: Option<Fault>,
    #[serde(rename = "buscaEventosListaResponse")]
    response: Option<EventsResponse>,
}

#[derive(Debug, Default, Deserialize)]
struct Fault {
    #[serde(default)]
    faultcode: String,
    #[serde(default)]
    faultstring: String,
    #[serde(default)]
    detail: FaultDetail,
}

/// `detail` is either plain text or wraps a `message` element.
#[derive(Debug, Default, Deserialize)]
struct FaultDetail {
    #[serde(rename = "$text", default)]
    text: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Default, Deserialize)]
struct EventsResponse {
    #[serde(rename = "return")]
    result: Option<EventsReturn>,
}

#[derive(Debug, Default, Deserialize)]
struct EventsReturn {
    #[serde(default)]
    objeto: Vec<Objeto>,
}

#[derive(Debug, Default, Deserialize)]
struct Objeto {
    #[serde(default)]
    numero: String,
    #[serde(default)]
    erro: String,
    #[serde(default)]
    nome: String,
    #[serde(default)]
    evento: Vec<Evento>,
}

#[derive(Debug, Default, Deserialize)]
struct Evento {
    #[serde(default)]
    data: String,
    #[serde(default)]
    hora: String,
    #[serde(default)]
    descricao: String,
}

impl From<Evento> for TrackingEvent {
    fn from(evento: Evento) -> Self {
        TrackingEvent::new(evento.data, evento.hora, evento.descricao)
    }
}

impl From<Objeto> for TrackingRecord {
    fn from(objeto: Objeto) -> Self {
        let event = objeto.evento.into_iter().next().map(TrackingEvent::from);
        TrackingRecord::new(objeto.numero, objeto.erro, objeto.nome, event)
    }
}

impl Envelope {
    fn into_reply(self) -> SoapReply {
        if let Some(fault) = self.body.fault
            && !fault.faultstring.is_empty()
        {
            let detail = if fault.detail.text.is_empty() {
                fault.detail.message
            } else {
                fault.detail.text
            };

            return SoapReply::Fault {
                code: fault.faultcode,
                message: fault.faultstring,
                detail,
            };
        }

        self.body
            .response
            .and_then(|response| response.result)
            .and_then(|result| result.objeto.into_iter().next())
            .map_or(SoapReply::Empty, |objeto| SoapReply::Record(objeto.into()))
    }
}

/// Decodes a response envelope.
///
/// A fault is reported only when its `faultstring` is non-empty. Otherwise the
/// first `objeto` under `buscaEventosListaResponse/return` is returned, with
/// its first `evento` as the record's event.
///
/// # Errors
///
/// Returns [`LookupError::Decode`] if the document is not well-formed XML,
/// including a body that ends before its elements are closed.
pub fn parse_response(body: &str) -> Result<SoapReply, LookupError> {
    let envelope: Envelope =
        quick_xml::de::from_str(body).map_err(|e| LookupError::Decode(e.to_string()))?;

    Ok(envelope.into_reply())
}
