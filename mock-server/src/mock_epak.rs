use crate::datasets::{Table, dataset_response, error_response, fault_response};
use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use hyper::Request;
use hyper::body::Incoming;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server;
use log::{error, trace};
use tokio::net::TcpListener;
use tower_service::Service;

pub const ENDPOINT_PATH: &str = "/epak_tracking/Oep_TrackEPak.asmx";
pub const VALID_USER: &str = "hey@you.com";
pub const VALID_PASSWORD: &str = "654321";
const ACTION_PREFIX: &str = "#Oca_e_Pak/";

const PROVINCES: &[Table] = &[(
    "Provincia",
    &[
        &[("IdProvincia", "1"), ("Descripcion", "CAPITAL FEDERAL")],
        &[("IdProvincia", "2"), ("Descripcion", "BUENOS AIRES")],
    ],
)];

const OPERATION_CODES: &[Table] = &[(
    "Table",
    &[
        &[("NroProducto", "77790"), ("Descripcion", "Puerta a Puerta")],
        &[("NroProducto", "77791"), ("Descripcion", "Puerta a Sucursal")],
    ],
)];

const SHIPMENTS: &[Table] = &[(
    "Envios",
    &[&[("NroProducto", "77790"), ("NumeroEnvio", "3867500000001234567")]],
)];

const SHIPPING_RATE: &[Table] = &[(
    "Table",
    &[&[
        ("Tarifador", "15"),
        ("Precio", "328.2"),
        ("Ambito", "Nacional 1"),
        ("PlazoEntrega", "3"),
        ("Adicional", "0"),
        ("Total", "397.12"),
    ]],
)];

const DELIVERY_STATUS: &[Table] = &[(
    "Table",
    &[&[
        ("NumeroEnvio", "3867500000001234567"),
        ("Estado", "En proceso de Retiro"),
        ("Sucursal", "CAPITAL FEDERAL"),
    ]],
)];

const CANCELLATION: &[Table] = &[(
    "Table",
    &[&[("IdResult", "100"), ("Mensaje", "La orden fue anulada")]],
)];

const ORDER_RESULT: &[Table] = &[(
    "Table",
    &[&[("OrdenRetiro", "8"), ("NumeroEnvio", "3867500000001234567")]],
)];

const PICKUP_ORDER: &[Table] = &[
    (
        "Resumen",
        &[&[("CodigoOperacion", "1234567"), ("CantidadRegistros", "1")]],
    ),
    (
        "DetalleIngresos",
        &[&[("OrdenRetiro", "8"), ("NumeroEnvio", "3867500000001234567")]],
    ),
];

const MULTIPLE_ORDERS: &[Table] = &[
    (
        "Resumen",
        &[&[("CodigoOperacion", "7654321"), ("CantidadRegistros", "2")]],
    ),
    ("DetalleIngresos", &[]),
];

const NO_ROWS: &[Table] = &[("Table", &[])];
const USER_EXISTS: &[Table] = &[("Table", &[&[("existe", "1")]])];
const USER_MISSING: &[Table] = &[("Table", &[&[("existe", "0")]])];

/// Mock of the e-Pak ASMX endpoint. Requests are told apart by their `SOAPAction` header.
pub struct MockEpak;

impl MockEpak {
    pub fn router() -> Router {
        Router::new().route(ENDPOINT_PATH, post(Self::asmx))
    }

    /// Serves on 127.0.0.1:3000 until the process ends.
    pub async fn listen() {
        let listener = TcpListener::bind("127.0.0.1:3000")
            .await
            .expect("Could not bind mock e-Pak server");

        Self::serve(listener).await;
    }

    pub async fn serve(listener: TcpListener) {
        let app = Self::router();

        loop {
            let (socket, _remote_addr) = match listener.accept().await {
                Ok(l) => l,
                Err(error) => {
                    error!("Failed to accept connection: {error}");
                    continue;
                }
            };

            let tower_service = app.clone();

            tokio::spawn(async move {
                let socket = TokioIo::new(socket);
                let hyper_service =
                    hyper::service::service_fn(move |request: Request<Incoming>| {
                        tower_service.clone().call(request)
                    });

                let mut builder = server::conn::auto::Builder::new(TokioExecutor::new());
                builder.http1().title_case_headers(true);

                if let Err(err) = builder
                    .serve_connection_with_upgrades(socket, hyper_service)
                    .await
                {
                    error!("Failed to serve connection: {err:#}");
                }
            });
        }
    }

    async fn asmx(headers: HeaderMap, body: String) -> impl IntoResponse {
        let action = headers
            .get("SOAPAction")
            .and_then(|action| action.to_str().ok())
            .unwrap_or_default()
            .trim_matches('"')
            .to_string();

        trace!("C: {action} {body}");

        let operation = action.strip_prefix(ACTION_PREFIX).unwrap_or_default();
        let authenticated = body.contains(&format!("<usr>{VALID_USER}</usr>"))
            && body.contains(&format!("<psw>{VALID_PASSWORD}</psw>"));

        let (status, reply) = match operation {
            "GetEpackUser" if authenticated => ok(dataset_response(operation, "NewDataSet", USER_EXISTS)),
            "GetEpackUser" => ok(dataset_response(operation, "NewDataSet", USER_MISSING)),
            "IngresoOR" | "IngresoORMultiplesRetiros" | "AnularOrdenGenerada"
            | "GetOperativasByUsuario"
                if !authenticated =>
            {
                ok(error_response(operation, "Usuario y/o contraseña inválidos"))
            }

            "IngresoOR" => ok(dataset_response(operation, "NewDataSet", PICKUP_ORDER)),
            "IngresoORMultiplesRetiros" => {
                ok(dataset_response(operation, "NewDataSet", MULTIPLE_ORDERS))
            }

            "AnularOrdenGenerada" => ok(dataset_response(operation, "NewDataSet", CANCELLATION)),
            "GetORResult" => ok(dataset_response(operation, "NewDataSet", ORDER_RESULT)),
            "Tarifar_Envio_Corporativo" => {
                ok(dataset_response(operation, "NewDataSet", SHIPPING_RATE))
            }

            "GetEnvioEstadoActual" if body.contains("<numeroEnvio>") => {
                ok(dataset_response(operation, "NewDataSet", DELIVERY_STATUS))
            }

            "GetEnvioEstadoActual" | "GetCentrosImposicion" => {
                ok(dataset_response(operation, "NewDataSet", NO_ROWS))
            }

            "GetOperativasByUsuario" => {
                ok(dataset_response(operation, "NewDataSet", OPERATION_CODES))
            }

            "List_Envios" => ok(dataset_response(operation, "NewDataSet", SHIPMENTS)),
            "GetProvincias" => ok(dataset_response(operation, "NewDataSet", PROVINCES)),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                fault_response(&format!(
                    "Server did not recognize the value of HTTP Header SOAPAction: {action}."
                )),
            ),
        };

        trace!("S: {reply}");
        (status, [(CONTENT_TYPE, "text/xml; charset=utf-8")], reply)
    }
}

fn ok(reply: String) -> (StatusCode, String) {
    (StatusCode::OK, reply)
}
