use actix_web::HttpResponse;
use actix_web::http::header::LOCATION;
use serde::Deserialize;

/// One-shot message shown after a redirect, carried as `?aviso=<code>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    InvalidData,
    Saved,
    SaveFailed,
    Cleared,
    ClearFailed,
}

impl Notice {
    const ALL: [Notice; 5] = [
        Notice::InvalidData,
        Notice::Saved,
        Notice::SaveFailed,
        Notice::Cleared,
        Notice::ClearFailed,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Notice::InvalidData => "datos_invalidos",
            Notice::Saved => "guardado",
            Notice::SaveFailed => "error_guardado",
            Notice::Cleared => "borrado",
            Notice::ClearFailed => "error_borrado",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|notice| notice.code() == code)
    }

    /// CSS class of the message box.
    pub fn level(self) -> &'static str {
        match self {
            Notice::InvalidData | Notice::SaveFailed | Notice::ClearFailed => "error",
            Notice::Saved => "success",
            Notice::Cleared => "info",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::InvalidData => "Error en los datos ingresados. Verifica los valores numéricos.",
            Notice::Saved => "Registros guardados correctamente.",
            Notice::SaveFailed => "Error al guardar en la base de datos.",
            Notice::Cleared => "Todos los registros han sido borrados.",
            Notice::ClearFailed => "Error al borrar los registros.",
        }
    }
}

#[derive(Deserialize)]
pub struct NoticeQuery {
    aviso: Option<String>,
}

impl NoticeQuery {
    /// Unknown codes are ignored.
    pub fn notice(&self) -> Option<Notice> {
        self.aviso.as_deref().and_then(Notice::from_code)
    }
}

pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

pub fn redirect_with_notice(location: &str, notice: Notice) -> HttpResponse {
    see_other(&format!("{}?aviso={}", location, notice.code()))
}
