// Application state for HTTP handlers
use crate::application::gateway_service::GatewayService;
use crate::application::tariff_service::TariffService;

#[derive(Clone)]
pub struct AppState {
    pub gateway_service: GatewayService,
    pub tariff_service: TariffService,
}
