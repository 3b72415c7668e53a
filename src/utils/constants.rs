/// Endpoint del POST de solicitudes.
/// Configurado en tiempo de compilación via SOLICITUD_ENDPOINT (.env);
/// sin fijar, el widget postea a la ruta actual de la página, que es
/// el contrato histórico con el servidor.
pub const SOLICITUD_ENDPOINT: Option<&str> = option_env!("SOLICITUD_ENDPOINT");
