//! Tables des émulateurs : codes DemulShooter, jeux pris en charge et
//! emplacements d'installation par défaut

/// Exécutable DemulShooter 32 bits
pub const SHOOTER_32: &str = "DemulShooter.exe";
/// Exécutable DemulShooter 64 bits
pub const SHOOTER_64: &str = "DemulShooterX64.exe";

/// En-têtes de groupe du sélecteur (non sélectionnables)
pub const GROUP_32: &str = "----DemulShooter----";
pub const GROUP_64: &str = "----DemulShooter64----";

/// (nom affiché, code interne, exécutable DemulShooter)
pub(crate) const EMULATOR_CODES: &[(&str, &str, &str)] = &[
    // DemulShooter.exe
    ("Coastal", "coastal", SHOOTER_32),
    ("Cxbx-Reloaded", "chihiro", SHOOTER_32),
    ("Demul 0.57 / 0.582 / 0.7a", "demul057", SHOOTER_32),
    ("Demul 0.7a Only", "demul07a", SHOOTER_32),
    ("Demul 0.582 and Above", "demul058", SHOOTER_32),
    ("Dolphin x64 v5.0", "dolphin5", SHOOTER_32),
    ("Namco ES4 Games", "es4", SHOOTER_32),
    ("GameWax Games", "gamewax", SHOOTER_32),
    ("Global VR Games", "globalvr", SHOOTER_32),
    ("KONAMI Arcade", "konami", SHOOTER_32),
    ("TeknoParrot Loader (Lindbergh)", "lindbergh", SHOOTER_32),
    ("Model2 Emulator v1.1a", "model2", SHOOTER_32),
    ("P&P Marketing Arcade", "ppmarket", SHOOTER_32),
    ("TeknoParrot Loader (Raw Thrill)", "rawthrill", SHOOTER_32),
    ("RingEdge 2 Games", "ringedge2", SHOOTER_32),
    ("TeknoParrot Loader (RingWide)", "ringwide", SHOOTER_32),
    ("SEGA Arcade (Plants vs Zombies)", "sega", SHOOTER_32),
    ("Taito Type X Games", "ttx", SHOOTER_32),
    ("Windows Games", "windows", SHOOTER_32),
    // DemulShooterX64.exe
    ("Adrenaline Amusements", "aagames", SHOOTER_64),
    ("SEGA Amusement Linkage Live System", "alls", SHOOTER_64),
    ("Namco ES3 System", "es3", SHOOTER_64),
    ("Flycast v2.0", "flycast", SHOOTER_64),
    ("RPCS3 System 357", "rpcs3", SHOOTER_64),
    ("Raw Thrill Arcade (64-bit)", "rawthrill", SHOOTER_64),
    ("Sega Nu", "seganu", SHOOTER_64),
    ("UNIS Technology", "unis", SHOOTER_64),
    ("United Distribution Company", "udc", SHOOTER_64),
    ("Windows Games (64)", "windows", SHOOTER_64),
];

/// Ordre d'affichage du sélecteur, en-têtes de groupe compris
pub(crate) const SELECTOR_ORDER: &[&str] = &[
    GROUP_32,
    "Coastal",
    "Cxbx-Reloaded",
    "Demul 0.57 / 0.582 / 0.7a",
    "Demul 0.582 and Above",
    "Demul 0.7a Only",
    "Dolphin x64 v5.0",
    "GameWax Games",
    "Global VR Games",
    "KONAMI Arcade",
    "Model2 Emulator v1.1a",
    "Namco ES4 Games",
    "P&P Marketing Arcade",
    "RingEdge 2 Games",
    "SEGA Arcade (Plants vs Zombies)",
    "Taito Type X Games",
    "TeknoParrot Loader (Lindbergh)",
    "TeknoParrot Loader (Raw Thrill)",
    "TeknoParrot Loader (RingWide)",
    "Windows Games",
    GROUP_64,
    "Adrenaline Amusements",
    "Flycast v2.0",
    "Namco ES3 System",
    "Raw Thrill Arcade (64-bit)",
    "RPCS3 System 357",
    "SEGA Amusement Linkage Live System",
    "Sega Nu",
    "UNIS Technology",
    "United Distribution Company",
    "Windows Games (64)",
];

const DEMUL_ALL: &[&str] = &[
    "Confidential Mission",
    "Death Crimson OX (USA)",
    "Death Crimson OX (JAP)",
    "House of The Dead II (US)",
    "House of The Dead II",
    "House of The Dead II (Prototype)",
    "Lupin the Third (the shooting)",
    "The Maze of the Kings",
    "Sports Shooting USA",
    "Ninja Assault (World)",
    "Ninja Assault (Asia)",
    "Ninja Assault (Japan)",
    "Ninja Assault (US)",
    "Brave Fire Fighters",
    "Sega Clay Challenge",
    "Manic Panic Ghosts",
    "Pokasuka Ghosts",
    "Ranger Mission",
    "Extreme Hunting",
    "Extreme Hunting 2",
];

const NINJA_ASSAULT: &[&str] = &[
    "Ninja Assault (World)",
    "Ninja Assault (Asia)",
    "Ninja Assault (Japan)",
    "Ninja Assault (US)",
];

/// Jeux listés pour chaque émulateur
pub(crate) const GAME_LISTS: &[(&str, &[&str])] = &[
    ("Coastal", &["Wild West Shootout"]),
    ("Cxbx-Reloaded", &["Virtua Cop 3"]),
    ("Demul 0.57 / 0.582 / 0.7a", DEMUL_ALL),
    (
        "Demul 0.7a Only",
        &[
            "Brave Fire Fighters",
            "Sega Clay Challenge",
            "Manic Panic Ghosts",
            "Pokasuka Ghosts",
            "Ranger Mission",
            "Extreme Hunting",
            "Extreme Hunting 2",
        ],
    ),
    ("Demul 0.582 and Above", NINJA_ASSAULT),
    ("Dolphin x64 v5.0", &["Parameter not used"]),
    ("Namco ES4 Games", &["Point Blank X"]),
    ("GameWax Games", &["Akuma Mortis Immortal"]),
    (
        "Global VR Games",
        &["Aliens Extermination", "Far Cry: Paradise Lost", "Fright Fear Land"],
    ),
    (
        "KONAMI Arcade",
        &["Castlevania: The Arcade", "Lethal Enforcers 3", "Wartran Troopers"],
    ),
    (
        "TeknoParrot Loader (Lindbergh)",
        &[
            "Too Spicy",
            "Ghost Squad Evolution",
            "House of the Dead 4",
            "House of the Dead 4: Special",
            "House of the Dead: EX",
            "Let's Go Jungle",
            "Let's Go Jungle Special",
            "Rambo",
        ],
    ),
    (
        "Model2 Emulator v1.1a",
        &[
            "Behind Enemy Lines",
            "Gunblade NY",
            "House of the Dead",
            "Rail Chase 2",
            "Virtua Cop",
            "Virtua Cop 2",
        ],
    ),
    ("P&P Marketing Arcade", &["Police Trainer 2"]),
    (
        "TeknoParrot Loader (Raw Thrill)",
        &[
            "Aliens Armageddon",
            "Jurassic Park",
            "Target: Terror - Gold",
            "Terminator Salvation",
            "Walking Dead",
        ],
    ),
    ("RingEdge 2 Games", &["Transformers: Shadow Rising"]),
    (
        "TeknoParrot Loader (RingWide)",
        &[
            "Let's Go Island",
            "Let's Go Island 3D",
            "Medaru no Gunman",
            "Operation G.H.O.S.T.",
            "Sega Dream Riders",
            "Sega Golden Gun",
            "Transformers: Human Alliance",
        ],
    ),
    ("SEGA Arcade (Plants vs Zombies)", &["Plants Vs Zombies: Last Stand"]),
    (
        "Taito Type X Games",
        &[
            "Block King Ball Shooter",
            "Elevator Action Death Parade",
            "Silent Hill: The Arcade",
            "Gaia Attack 4",
            "Gundam: Spirit of Zeon",
            "Gundam: Spirit of Zeon (DualScreen)",
            "Haunted Museum",
            "Haunted Museum 2",
            "Music Gun Gun! 2",
        ],
    ),
    (
        "Windows Games",
        &[
            "Alien Disco Safari",
            "Art Is Dead",
            "Bug Busters",
            "Colt's Wild West Shootout",
            "Friction",
            "Heavy Fire Afghanistan",
            "Heavy Fire Afghanistan (Dual Player)",
            "Heavy Fire Shattered Spear",
            "Heavy Fire Shattered Spear (Dual Player)",
            "House of The Dead II (PC)",
            "House of The Dead III (PC)",
            "House of The Dead: Overkill",
            "Mad Bullets",
            "Reload",
        ],
    ),
    (
        "Adrenaline Amusements",
        &["Drakon: Realm Keepers", "Rabbids Hollywood Arcade", "Tomb Raider Arcade"],
    ),
    ("SEGA Amusement Linkage Live System", &["House of the Dead: Scarlet Dawn"]),
    ("Namco ES3 System", &["Time Crisis 5"]),
    (
        "Flycast v2.0",
        &[
            "Confidential Mission",
            "Death Crimson OX",
            "House of The Dead II (US)",
            "House of The Dead II",
            "House of The Dead II (Prototype)",
            "Lupin the Third (the shooting)",
            "The Maze of the Kings",
            "Ninja Assault (World)",
            "Ninja Assault (Asia)",
            "Ninja Assault (Japan)",
            "Ninja Assault (US)",
        ],
    ),
    (
        "RPCS3 System 357",
        &["Dark Escape 4D", "Deadstorm Pirates: Special Edition", "Sailor Zombies"],
    ),
    ("Raw Thrill Arcade (64-bit)", &["Nerf Arcade"]),
    ("Sega Nu", &["Luigi Mansion Arcade"]),
    ("United Distribution Company", &["Mars Sortie"]),
    (
        "UNIS Technology",
        &["Elevator Action Invasion", "Night Hunter Arcade", "Raccoon Rampage"],
    ),
    (
        "Windows Games (64)",
        &[
            "Big Buck Hunter: Ultimate Trophy",
            "DCOP",
            "Operation Wolf Returns",
            "House of the Dead: Remake (Arcade Plugin)",
        ],
    ),
];

/// Disposition d'installation d'un émulateur
#[derive(Debug, Clone, Copy)]
pub(crate) struct InstallLayout {
    /// Répertoire sous `C:/`
    pub windows_dir: &'static str,
    /// Répertoire sous `~/Applications` et `~/Games`
    pub unix_dir: &'static str,
    /// Nom de l'exécutable, sans extension
    pub executable: &'static str,
}

const fn layout(dir: &'static str, executable: &'static str) -> InstallLayout {
    InstallLayout {
        windows_dir: dir,
        unix_dir: dir,
        executable,
    }
}

/// Emplacements par défaut ; les jeux Windows n'en ont pas
pub(crate) const INSTALL_LAYOUTS: &[(&str, InstallLayout)] = &[
    ("Coastal", layout("Coastal", "Coastal")),
    ("Cxbx-Reloaded", layout("Cxbx-Reloaded", "chihiro")),
    ("Demul 0.57 / 0.582 / 0.7a", layout("Demul", "demul")),
    ("Demul 0.7a Only", layout("Demul", "demul")),
    ("Demul 0.582 and Above", layout("Demul", "demul")),
    ("Dolphin x64 v5.0", layout("Dolphin", "Dolphin")),
    ("Namco ES4 Games", layout("NamcoES4", "es4")),
    ("GameWax Games", layout("GameWax", "GameWax")),
    ("Global VR Games", layout("GlobalVR", "GlobalVR")),
    ("KONAMI Arcade", layout("KONAMI", "Arcade")),
    ("TeknoParrot Loader (Lindbergh)", layout("TeknoParrot", "TeknoParrotUi")),
    ("TeknoParrot Loader (Raw Thrill)", layout("TeknoParrot", "TeknoParrotUi")),
    ("TeknoParrot Loader (RingWide)", layout("TeknoParrot", "TeknoParrotUi")),
    (
        "Model2 Emulator v1.1a",
        InstallLayout {
            windows_dir: "Sega Model 2",
            unix_dir: "Model2",
            executable: "emulator_multicpu",
        },
    ),
    ("P&P Marketing Arcade", layout("PandP", "Arcade")),
    ("RingEdge 2 Games", layout("RingEdge2", "ringedge2")),
    ("Taito Type X Games", layout("TaitoTypeX", "typex_loader")),
    ("Adrenaline Amusements", layout("Adrenaline", "Adrenaline")),
    ("SEGA Amusement Linkage Live System", layout("SEGA", "AmusementLinkage")),
    ("Namco ES3 System", layout("NamcoES3", "es3")),
    ("Flycast v2.0", layout("Flycast", "flycast")),
    ("RPCS3 System 357", layout("RPCS3", "rpcs3")),
    ("Sega Nu", layout("SegaNu", "seganu")),
    ("UNIS Technology", layout("UNIS", "UNIS")),
];
