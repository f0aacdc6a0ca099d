use gloo_net::http::Request;
use serde::Deserialize;

use crate::domain::{
    errors::DrawFetchError,
    logging::LogComponent,
    lottery::{DrawNumber, DrawRecord, DrawRecordSource, DrawStatus, LottoNumber, NumberSet},
};

/// Raw draw payload. Failed lookups only carry `returnValue`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DrawResponseDto {
    return_value: String,
    drw_no: Option<u32>,
    drw_no_date: Option<String>,
    drwt_no1: Option<u8>,
    drwt_no2: Option<u8>,
    drwt_no3: Option<u8>,
    drwt_no4: Option<u8>,
    drwt_no5: Option<u8>,
    drwt_no6: Option<u8>,
    bnus_no: Option<u8>,
}

fn missing(field: &str) -> DrawFetchError {
    DrawFetchError::Malformed(format!("missing field {field}"))
}

impl DrawResponseDto {
    /// Builds a record carrying the reported status. A `fail` body without
    /// draw fields is rejected outright.
    fn into_record(self) -> Result<DrawRecord, DrawFetchError> {
        let status: DrawStatus = self.return_value.parse().map_err(|_| {
            DrawFetchError::Malformed(format!("unknown returnValue '{}'", self.return_value))
        })?;
        if status == DrawStatus::Fail && self.drw_no.is_none() {
            return Err(DrawFetchError::Rejected);
        }

        let number = DrawNumber::new(self.drw_no.ok_or_else(|| missing("drwNo"))?)
            .map_err(|e| DrawFetchError::Malformed(e.to_string()))?;
        let date = self.drw_no_date.ok_or_else(|| missing("drwNoDate"))?;

        let winning = [
            self.drwt_no1,
            self.drwt_no2,
            self.drwt_no3,
            self.drwt_no4,
            self.drwt_no5,
            self.drwt_no6,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, n)| {
            n.ok_or_else(|| DrawFetchError::Malformed(format!("missing field drwtNo{}", i + 1)))
        })
        .collect::<Result<Vec<u8>, _>>()?;
        let winning =
            NumberSet::new(&winning).map_err(|e| DrawFetchError::Malformed(e.to_string()))?;

        let bonus = LottoNumber::new(self.bnus_no.ok_or_else(|| missing("bnusNo"))?)
            .map_err(|e| DrawFetchError::Malformed(e.to_string()))?;
        if winning.contains(bonus) {
            return Err(DrawFetchError::Malformed(format!(
                "bonus {bonus} repeats a winning number"
            )));
        }

        Ok(DrawRecord { number, date, winning, bonus, status })
    }
}

/// Non-2xx answers never carry a draw.
pub fn check_http_status(status: u16) -> Result<(), DrawFetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(DrawFetchError::HttpStatus(status))
    }
}

/// Parse one draw-service body and accept it only as a successful answer
/// for `requested`.
pub fn parse_draw_response(
    body: &str,
    requested: DrawNumber,
) -> Result<DrawRecord, DrawFetchError> {
    let dto: DrawResponseDto =
        serde_json::from_str(body).map_err(|e| DrawFetchError::Malformed(e.to_string()))?;
    let record = dto.into_record()?;

    if !record.is_success() {
        return Err(DrawFetchError::Rejected);
    }
    if record.number != requested {
        return Err(DrawFetchError::Malformed(format!(
            "asked for draw {requested}, got {}",
            record.number
        )));
    }
    Ok(record)
}

/// REST client for the historical draw endpoint
#[derive(Debug, Clone)]
pub struct LottoApiClient {
    base_url: String,
}

impl LottoApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn draw_url(&self, number: DrawNumber) -> String {
        format!("{}{}", self.base_url, number)
    }

    /// Single GET, no retries.
    pub async fn try_fetch_draw(&self, number: DrawNumber) -> Result<DrawRecord, DrawFetchError> {
        let url = self.draw_url(number);
        crate::log_debug!(LogComponent::Infrastructure("LottoApi"), "📡 Fetching draw from: {url}");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| DrawFetchError::Transport(format!("{e:?}")))?;

        check_http_status(response.status())?;

        let body = response
            .text()
            .await
            .map_err(|e| DrawFetchError::Transport(format!("{e:?}")))?;
        parse_draw_response(&body, number)
    }
}

impl DrawRecordSource for LottoApiClient {
    async fn fetch_draw(&self, number: DrawNumber) -> Option<DrawRecord> {
        match self.try_fetch_draw(number).await {
            Ok(record) => Some(record),
            Err(e) => {
                crate::log_warn!(
                    LogComponent::Infrastructure("LottoApi"),
                    "⚠️ No record for draw {number}: {e}"
                );
                None
            }
        }
    }
}
