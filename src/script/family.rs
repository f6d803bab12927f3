//! Ligne de lancement propre à chaque famille d'émulateurs

/// Titres Atomiswave lancés par Demul 0.7a
const ATOMISWAVE_ROMS: &[&str] = &["claychal", "rangrmsn", "sprtshot", "xtrmhunt", "xtrmhnt2"];

/// Familles qui lisent un profil XML de TeknoParrot
const PROFILE_FAMILIES: &[&str] = &["lindbergh", "ringwide", "rawthrill"];

/// Système passé à `-run=` pour Demul 0.7a
pub fn demul_run_parameter(rom_code: &str) -> &'static str {
    if rom_code == "braveff" {
        "hikaru"
    } else if ATOMISWAVE_ROMS.contains(&rom_code) {
        "awave"
    } else {
        "naomi"
    }
}

/// Dernière ligne du script, selon le code interne exact de l'émulateur
pub fn family_line(code: &str, executable: &str, rom_code: &str, rom_archive: &str) -> String {
    match code {
        "demul07a" => format!(
            "start \"demul07a\" \"{}\" -run={} -rom={}",
            executable,
            demul_run_parameter(rom_code),
            rom_code
        ),
        "flycast" => format!(
            "start \"flycast\" {} -config window:fullscreen=yes \"{}\"",
            executable, rom_archive
        ),
        code if PROFILE_FAMILIES.contains(&code) => {
            format!("start \"{}\" {} --profile={}.xml", code, executable, rom_code)
        }
        code => format!("start \"{}\" {} {}", code, executable, rom_code),
    }
}
