use super::form_number::parse_required;
use crate::error::ValidationError;
use serde::Deserialize;

/// Yield of green cherries relative to dry coffee.
const GREEN_YIELD: f64 = 0.92;
/// Yield of semi-ripe ("colorado") cherries relative to dry coffee.
const SEMI_RIPE_YIELD: f64 = 0.35;
/// Share of the adjusted semi-ripe quantity that ends up as dry coffee.
const SEMI_RIPE_DRY_YIELD: f64 = 0.60;

/// A reference load is worth `cargo_value`; dry coffee is priced per 125 units of it.
const DRY_DIVISOR: f64 = 125.0;
const GREEN_DIVISOR: f64 = 250.0;
const SEMI_RIPE_DIVISOR: f64 = 250.0;

/// Raw fields of the price calculation form (`POST /calcular`).
#[derive(Deserialize, Default)]
pub struct CoffeeCargoForm {
    pub valor_carga_cafe: Option<String>,
    pub precio_kilo_alimentacion: Option<String>,
    pub precio_kilo_no_alimentacion: Option<String>,
    pub cafe_seco: Option<String>,
    pub cafe_verde: Option<String>,
    pub cafe_colorado: Option<String>,
}

/// Harvested cargo to be valued, together with the supplement prices entered alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct CoffeeCargo {
    /// Monetary value of one reference load.
    pub cargo_value: f64,
    pub food_price_per_kilo: f64,
    pub non_food_price_per_kilo: f64,
    pub dry: f64,
    pub green: f64,
    pub semi_ripe: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    pub adjusted_dry: f64,
    pub adjusted_green: f64,
    pub adjusted_semi_ripe: f64,
    /// Informational, not part of the price.
    pub adjusted_semi_ripe_dry: f64,
    pub unit_value_dry: f64,
    pub unit_value_green: f64,
    pub unit_value_semi_ripe: f64,
    pub price_dry: f64,
    pub price_green: f64,
    pub price_semi_ripe: f64,
    pub price_total: f64,
}

impl TryFrom<CoffeeCargoForm> for CoffeeCargo {
    type Error = ValidationError;

    fn try_from(form: CoffeeCargoForm) -> Result<Self, Self::Error> {
        Ok(Self {
            cargo_value: parse_required("valor_carga_cafe", form.valor_carga_cafe.as_deref())?,
            food_price_per_kilo: parse_required(
                "precio_kilo_alimentacion",
                form.precio_kilo_alimentacion.as_deref(),
            )?,
            non_food_price_per_kilo: parse_required(
                "precio_kilo_no_alimentacion",
                form.precio_kilo_no_alimentacion.as_deref(),
            )?,
            dry: parse_required("cafe_seco", form.cafe_seco.as_deref())?,
            green: parse_required("cafe_verde", form.cafe_verde.as_deref())?,
            semi_ripe: parse_required("cafe_colorado", form.cafe_colorado.as_deref())?,
        })
    }
}

impl CoffeeCargo {
    /// Converts the cargo into its monetary value. Inputs are not bounds-checked.
    pub fn price(&self) -> PriceBreakdown {
        let adjusted_dry = self.dry;
        let adjusted_green = self.green * GREEN_YIELD;
        let adjusted_semi_ripe = self.semi_ripe * SEMI_RIPE_YIELD;

        let unit_value_dry = self.cargo_value / DRY_DIVISOR;
        let unit_value_green = self.cargo_value / GREEN_DIVISOR;
        let unit_value_semi_ripe = self.cargo_value / SEMI_RIPE_DIVISOR;

        let price_dry = unit_value_dry * adjusted_dry;
        let price_green = unit_value_green * adjusted_green;
        let price_semi_ripe = unit_value_semi_ripe * adjusted_semi_ripe;

        PriceBreakdown {
            adjusted_dry,
            adjusted_green,
            adjusted_semi_ripe,
            adjusted_semi_ripe_dry: adjusted_semi_ripe * SEMI_RIPE_DRY_YIELD,
            unit_value_dry,
            unit_value_green,
            unit_value_semi_ripe,
            price_dry,
            price_green,
            price_semi_ripe,
            price_total: price_dry + price_green + price_semi_ripe,
        }
    }
}
