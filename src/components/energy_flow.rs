use yew::prelude::*;

use crate::config::Config;
use crate::hooks::use_asset::use_data_uri;

/// Animated PV → inverter → THI band
#[function_component(EnergyFlow)]
pub fn energy_flow() -> Html {
    let thi_logo = use_data_uri(Config::LOGO_PATH, Config::PANEL_IMAGE_URL);

    html! {
        <div class="flow-band">
            <div class="flow-grid">
                <div class="flow-node">
                    <img src={Config::PANEL_IMAGE_URL} alt="PV" />
                    <div class="cap">{"DC · PV"}</div>
                </div>
                <div class="flow-line dc"></div>
                <div class="flow-node">
                    <img src={Config::INVERTER_IMAGE_URL} alt="Inverter" />
                    <div class="cap">{"AC · Inverter"}</div>
                </div>
                <div class="flow-line ac"></div>
                <div class="flow-node">
                    <img src={thi_logo} alt="THI" />
                    <div class="cap">{"THI"}</div>
                </div>
            </div>
        </div>
    }
}
