use httpmock::prelude::*;
use std::time::Duration;
use tracking_gateway::domain::lookup::{LookupError, TrackingLookup};
use tracking_gateway::infrastructure::soap::{SoapCredentials, SoapTrackingClient};

const FOUND: &str = r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
  <soapenv:Body>
    <ns2:buscaEventosListaResponse xmlns:ns2="http://resource.webservice.correios.com.br/">
      <return>
        <versao>2.0</versao>
        <qtd>1</qtd>
        <objeto>
          <numero>PN848933136BR</numero>
          <sigla>PN</sigla>
          <nome>ENCOMENDA PAC</nome>
          <categoria>ENCOMENDA PAC</categoria>
          <evento>
            <tipo>BDE</tipo>
            <status>01</status>
            <data>20/02/2017</data>
            <hora>15:43</hora>
            <descricao>Objeto entregue ao destinatário</descricao>
          </evento>
        </objeto>
      </return>
    </ns2:buscaEventosListaResponse>
  </soapenv:Body>
</soapenv:Envelope>"#;

const NOT_FOUND: &str = r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
  <soapenv:Body>
    <ns2:buscaEventosListaResponse xmlns:ns2="http://resource.webservice.correios.com.br/">
      <return>
        <objeto>
          <numero>XX123CC</numero>
          <erro>Objeto não encontrado na base de dados dos Correios.</erro>
        </objeto>
      </return>
    </ns2:buscaEventosListaResponse>
  </soapenv:Body>
</soapenv:Envelope>"#;

const FAULT: &str = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <soap:Fault>
      <faultcode>soap:Server</faultcode>
      <faultstring>Servico indisponivel</faultstring>
      <detail>tente novamente</detail>
    </soap:Fault>
  </soap:Body>
</soap:Envelope>"#;

fn client_for(server: &MockServer, timeout: Duration) -> SoapTrackingClient {
    SoapTrackingClient::new(server.url("/service/rastro"), SoapCredentials::default(), timeout)
        .unwrap()
}

#[tokio::test]
async fn test_lookup_found_record() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/service/rastro")
                .header("content-type", "text/xml;charset=UTF-8")
                .header("soapaction", "\"buscaEventosLista\"")
                .body_contains("<objetos>PN848933136BR</objetos>")
                .body_contains("<usuario>ECT</usuario>");
            then.status(200)
                .header("content-type", "text/xml;charset=UTF-8")
                .body(FOUND);
        })
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let record = client.lookup("PN848933136BR").await.unwrap();

    mock.assert_async().await;
    assert_eq!(record.number, "PN848933136BR");
    assert_eq!(record.name, "ENCOMENDA PAC");
    assert!(record.is_found());

    let event = record.event.expect("event");
    assert_eq!(event.date, "20/02/2017");
    assert_eq!(event.time, "15:43");
    assert_eq!(event.description, "Objeto entregue ao destinatário");
}

#[tokio::test]
async fn test_lookup_not_found_is_a_record() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/service/rastro");
            then.status(200).body(NOT_FOUND);
        })
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let record = client.lookup("XX123CC").await.unwrap();

    assert_eq!(record.number, "XX123CC");
    assert!(!record.is_found());
    assert!(record.event.is_none());
}

#[tokio::test]
async fn test_lookup_fault_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/service/rastro");
            then.status(500).body(FAULT);
        })
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let err = client.lookup("PN848933136BR").await.unwrap_err();

    assert!(matches!(err, LookupError::Fault { .. }));
    assert_eq!(
        err.to_string(),
        "Faultcode: soap:Server. Faultstring: Servico indisponivel. Detail: tente novamente"
    );
}

#[tokio::test]
async fn test_lookup_non_xml_error_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/service/rastro");
            then.status(502).body("<html><body>Bad Gateway</html>");
        })
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let err = client.lookup("PN848933136BR").await.unwrap_err();

    assert!(matches!(err, LookupError::Status(502)));
}

#[tokio::test]
async fn test_lookup_unexpected_document() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/service/rastro");
            then.status(200).body("<html><body>maintenance</body></html>");
        })
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let err = client.lookup("PN848933136BR").await.unwrap_err();

    assert!(matches!(err, LookupError::MissingRecord));
}

#[tokio::test]
async fn test_lookup_malformed_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/service/rastro");
            then.status(200).body("<Envelope><Body></Envelope>");
        })
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let err = client.lookup("PN848933136BR").await.unwrap_err();

    assert!(matches!(err, LookupError::Decode(_)));
}

#[tokio::test]
async fn test_lookup_truncated_body() {
    let cut = FOUND.find("</objeto>").unwrap();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/service/rastro");
            then.status(200).body(&FOUND[..cut]);
        })
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let err = client.lookup("PN848933136BR").await.unwrap_err();

    assert!(matches!(err, LookupError::Decode(_)));
}

#[tokio::test]
async fn test_lookup_timeout() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/service/rastro");
            then.status(200)
                .delay(Duration::from_secs(2))
                .body(FOUND);
        })
        .await;

    let client = client_for(&server, Duration::from_millis(200));
    let err = client.lookup("PN848933136BR").await.unwrap_err();

    assert!(matches!(err, LookupError::Http(ref e) if e.is_timeout()));
}

#[tokio::test]
async fn test_lookup_connection_refused() {
    let client = SoapTrackingClient::new(
        "http://127.0.0.1:1/service/rastro",
        SoapCredentials::default(),
        Duration::from_secs(2),
    )
    .unwrap();

    let err = client.lookup("PN848933136BR").await.unwrap_err();

    assert!(matches!(err, LookupError::Http(_)));
}
