// src/main.rs
//
// Calculatrice pavé — point d’entrée NATIF + WEB (WASM)
// -----------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
//                                 ou `--eval <EXPR>` sans fenêtre (stdout)
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// Journal (natif) : RUST_LOG=calculatrice_pave=debug pour voir chaque évaluation.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice pavé";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::process::ExitCode;

    use clap::Parser;
    use eframe::egui;
    use tracing::{error, info};
    use tracing_subscriber::EnvFilter;

    use super::noyau::format::{formater, DECIMALES};
    use super::noyau::EvalError;
    use super::{noyau, AppCalc, TITRE_APP};

    /// Filtre du journal quand RUST_LOG est absent.
    const FILTRE_DEFAUT: &str = "calculatrice_pave=info";

    /// Calculatrice scientifique à pavé numérique.
    #[derive(Parser, Debug)]
    #[command(version, about)]
    pub struct Cli {
        /// Évalue une expression, affiche le résultat (ou "Error") et quitte sans fenêtre.
        #[arg(long, value_name = "EXPR", allow_hyphen_values = true)]
        pub eval: Option<String>,
    }

    pub fn installer_journal() {
        let filtre =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILTRE_DEFAUT));

        // stderr : stdout reste réservé au résultat de --eval
        tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_writer(std::io::stderr)
            .init();
    }

    /// --eval : 0 si succès, 1 si "Error".
    pub fn evaluer_en_ligne(expr: &str) -> ExitCode {
        // la valeur est déjà arrondie : formater la réécrit telle quelle
        let texte = noyau::evaluate(expr)
            .and_then(|v| formater(v, DECIMALES).ok_or_else(|| EvalError::domain("non fini")));

        match texte {
            Ok(txt) => {
                println!("{txt}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                info!(
                    erreur = %e,
                    syntaxe = e.is_syntax(),
                    domaine = e.is_domain(),
                    "expression refusée"
                );
                println!("{}", noyau::ERREUR_AFFICHEE);
                ExitCode::FAILURE
            }
        }
    }

    pub fn lancer_fenetre() -> eframe::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([380.0, 640.0])
                .with_min_inner_size([360.0, 560.0]),
            ..Default::default()
        };

        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(|_cc| Ok(Box::<AppCalc>::default())),
        )
    }

    pub fn main() -> ExitCode {
        installer_journal();
        let cli = Cli::parse();

        if let Some(expr) = cli.eval {
            return evaluer_en_ligne(&expr);
        }

        info!("ouverture de la fenêtre");
        match lancer_fenetre() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(erreur = %e, "fenêtre impossible à ouvrir");
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    natif::main()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let canvas: HtmlCanvasElement = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
