use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::fs;
use std::io;
use std::path::Path;

use qmamehook_ini_rust::*;

/// Éditeur de profils QMamehook / DemulShooter
#[derive(Parser)]
#[command(name = "qmamehook-ini", version)]
#[command(about = "Édite les profils INI de QMamehook et génère les scripts de lancement")]
struct Cli {
    /// Fichier de configuration
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Affiche le modèle lu
    Show { ini: String },

    /// Écrit une sortie, en texte libre ou par libellé de préréglage
    SetField {
        ini: String,
        /// Nom de clé (`Clip`, `CtmRecoil`, `Credits`, nom personnalisé...)
        field: String,
        /// Valeur, ou libellé avec `--preset` ; vide efface
        #[arg(default_value = "")]
        value: String,
        /// Un seul joueur au lieu de tous les joueurs détectés
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
        player: Option<u8>,
        /// `value` est un libellé de préréglage
        #[arg(long)]
        preset: bool,
    },

    /// Change un mode : device offscreen pedal aspect rumble autofire display
    SetMode {
        ini: String,
        category: String,
        /// Code (`1L`, `M3x1`...) ou `none`
        code: String,
    },

    /// Change le code de démarrage (S0 S1 S2 S3 S4 S6)
    SetStart { ini: String, code: String },

    /// Couleur de lampe d'un joueur, ou `none`
    SetColor {
        ini: String,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=4))]
        player: u8,
        color: String,
    },

    /// Affiche le script de lancement
    Script { emulator: String, rom: String },

    /// Liste les émulateurs, ou les jeux d'un émulateur
    Games { emulator: Option<String> },

    /// Écrit ini/ et bat/ sous le répertoire QMamehook
    Export {
        emulator: String,
        rom: String,
        ini: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = ToolConfig::load_or_default(&cli.config);
    info!("QMamehook INI v{}", VERSION);

    match cli.command {
        Commands::Show { ini } => show(&ini),
        Commands::SetField {
            ini,
            field,
            value,
            player,
            preset,
        } => set_field(&ini, &field, value, player, preset),
        Commands::SetMode { ini, category, code } => set_mode(&ini, &category, &code),
        Commands::SetStart { ini, code } => set_start(&ini, &code),
        Commands::SetColor { ini, player, color } => set_color(&ini, player, &color),
        Commands::Script { emulator, rom } => print_script(&emulator, &rom, &mut config),
        Commands::Games { emulator } => list_games(emulator.as_deref()),
        Commands::Export { emulator, rom, ini } => {
            export(&emulator, &rom, &ini, &mut config)?;
            config
                .save_to_file(&cli.config)
                .with_context(|| format!("écriture de {}", cli.config))
        }
    }
}

/// Texte INI d'un fichier, ou l'en-tête par défaut s'il n'existe pas
fn read_ini(path: &str) -> Result<String> {
    let existing = match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(e).with_context(|| format!("lecture de {}", path)),
    };
    Ok(with_default_header(existing.as_deref()))
}

fn load_session(path: &str) -> Result<Synchronizer> {
    let text = read_ini(path)?;
    let mut sync = Synchronizer::new();
    sync.load(&text);
    Ok(sync)
}

/// Applique un événement d'édition puis enregistre le fichier
fn apply_and_save(path: &str, event: EditEvent) -> Result<()> {
    let mut sync = load_session(path)?;
    let text = sync
        .dispatch(event)
        .ok_or_else(|| anyhow!("écriture ignorée : chargement en cours"))?;
    fs::write(path, text).with_context(|| format!("écriture de {}", path))?;
    info!("INI mis à jour : {}", path);
    Ok(())
}

fn player(number: u8) -> Result<Player> {
    Player::new(number).ok_or_else(|| anyhow!("joueur invalide : {} (1 à 4)", number))
}

fn show(path: &str) -> Result<()> {
    let sync = load_session(path)?;
    let model = sync.model();

    println!("Joueurs : {}", model.player_count);
    println!("Démarrage : {}", model.start.label());
    for category in ModeCategory::ALL {
        let code = model
            .modes
            .get(category)
            .map_or_else(|| UNSET_LABEL.to_string(), |code| code.label());
        println!("{:<32} {}", category.title(), code);
    }

    for (name, state) in &model.fields {
        if !state.present {
            continue;
        }
        println!(
            "{:<12} {:<45} {}",
            name,
            state.preset.label(),
            state.value.as_deref().unwrap_or("")
        );
    }

    for player in model.player_count.players() {
        let color = model.lamp_color(player).map_or("X", LampColor::name);
        println!("Lampe P{} : {}", player, color);
    }

    if !model.custom_fields.is_empty() {
        println!("Champs personnalisés : {}", model.custom_fields.join(", "));
    }

    Ok(())
}

fn set_field(path: &str, field: &str, value: String, number: Option<u8>, preset: bool) -> Result<()> {
    let kind = FieldKind::from_key_name(field);
    let player = number.map(player).transpose()?;

    let event = if preset {
        EditEvent::Preset {
            kind,
            player,
            label: value,
        }
    } else {
        EditEvent::field(kind, player, value)
    };
    apply_and_save(path, event)
}

fn set_mode(path: &str, name: &str, value: &str) -> Result<()> {
    let category = ModeCategory::from_short_name(name)
        .ok_or_else(|| anyhow!("catégorie inconnue : {}", name))?;

    let code = if value.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(
            category
                .parse(value)
                .ok_or_else(|| anyhow!("code invalide pour {} : {}", category.short_name(), value))?,
        )
    };

    apply_and_save(path, EditEvent::Mode { category, code })
}

fn set_start(path: &str, value: &str) -> Result<()> {
    let code = StartCode::parse(value).ok_or_else(|| anyhow!("code de démarrage invalide : {}", value))?;
    apply_and_save(path, EditEvent::Start(code))
}

fn set_color(path: &str, number: u8, value: &str) -> Result<()> {
    let color = if value.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(LampColor::parse(value).ok_or_else(|| anyhow!("couleur inconnue : {}", value))?)
    };
    apply_and_save(path, EditEvent::lamp(player(number)?, color))
}

/// Profil d'émulateur et chemins par défaut appliqués à la configuration
fn resolve_target(emulator: &str, rom: &str, config: &mut ToolConfig) -> Result<(EmulatorProfile, String)> {
    let profile =
        resolve_emulator(emulator).ok_or_else(|| anyhow!("émulateur inconnu : {}", emulator))?;
    if config.paths.emulator_path.is_empty() || config.session.emulator != emulator {
        config.apply_emulator_defaults(emulator);
    }
    config.session.rom = rom.to_string();

    Ok((profile, resolve_rom(rom)))
}

fn print_script(emulator: &str, rom: &str, config: &mut ToolConfig) -> Result<()> {
    let (profile, rom_code) = resolve_target(emulator, rom, config)?;
    println!("{}", generate_script(&profile, &rom_code, &config.script_settings()));
    Ok(())
}

fn list_games(emulator: Option<&str>) -> Result<()> {
    match emulator {
        Some(emulator) => {
            let games = games_for(emulator).ok_or_else(|| anyhow!("émulateur inconnu : {}", emulator))?;
            for game in games {
                println!("{:<45} {}", game, resolve_rom(game));
            }
        }
        None => {
            for entry in emulator_selector() {
                match entry {
                    SelectorEntry::Group(title) => println!("{}", title),
                    SelectorEntry::Emulator(name) => println!("  {}", name),
                }
            }
        }
    }
    Ok(())
}

fn export(emulator: &str, rom: &str, ini_path: &str, config: &mut ToolConfig) -> Result<()> {
    let (profile, rom_code) = resolve_target(emulator, rom, config)?;
    let ini_text = read_ini(ini_path)?;

    let base = config.paths.qmamehook_dir.clone();
    let existing = read_existing(Path::new(&base), rom)?;

    // Un script existant garde ses lignes ; seule la première est régénérée
    let mut settings = config.script_settings();
    let script = match existing.script {
        Some(script) => {
            if let Some(args) = extract_shooter_args(&script) {
                settings.extra_args = args;
            }
            rewrite_shooter_line(&script, &profile, &rom_code, &settings)
        }
        None => generate_script(&profile, &rom_code, &settings),
    };

    let files = export_files(&base, rom, &ini_text, &script)?;
    println!("{}", files.ini.display());
    println!("{}", files.bat.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_set_field() {
        let cli = Cli::parse_from([
            "qmamehook-ini",
            "set-field",
            "game.ini",
            "Clip",
            "Red/Off",
            "--player",
            "2",
            "--preset",
        ]);
        assert_eq!(cli.config, CONFIG_FILE);
        match cli.command {
            Commands::SetField {
                field,
                value,
                player,
                preset,
                ..
            } => {
                assert_eq!(field, "Clip");
                assert_eq!(value, "Red/Off");
                assert_eq!(player, Some(2));
                assert!(preset);
            }
            _ => panic!("sous-commande inattendue"),
        }
    }

    #[test]
    fn test_player_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["qmamehook-ini", "set-color", "game.ini", "5", "red"]).is_err());
    }

    #[test]
    fn test_preset_event_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.ini");
        fs::write(&path, "[Output]\nP1_Clip = cmw 1 XX\n").unwrap();
        let path = path.to_str().unwrap();

        set_field(path, "Clip", "Red/White".to_string(), Some(1), true).unwrap();
        let text = fs::read_to_string(path).unwrap();
        assert!(text.starts_with("[General]\n"));
        assert!(text.ends_with("[Output]\nP1_Clip = cmw 1 F2x1x255xF3x1x255xF4x1x255\n"));
    }
}
