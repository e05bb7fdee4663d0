//! Built-in releaser names whose display form cannot be derived by the casing rules.

/// Styled names keyed by their URL path, shown verbatim.
pub const STYLED: &[(&str, &str)] = &[
    ("god-network", "G.O.D. Network"),
    ("german-diskdoubler", "German DiskDoubler"),
    ("excel_xl", "EXCEL/XL!"),
    ("ob_gyn", "OB/GYN"),
    ("primag", "PRiMAG"),
    ("roi-production", "ROI Production"),
    ("dome", "DoME"),
    ("image-productions-2", "iMAGE Productions (#2)"),
    ("image-nj", "iMAGE (NJ)"),
    ("ninja", "NiNJA"),
    ("orgasming-gaming-magazine", "orGAsMING Gaming Magazine"),
    ("gameboycolor-world-charts", "GameBoyColor World Charts"),
    ("email-compilation", "e.mail compilation"),
    ("2000-ad", "2000AD"),
    ("79th-trac", "79th TRAC"),
    ("acid-productions", "ACiD Productions"),
    ("biased", "bIASED"),
    ("binpda", "BiNPDA"),
    ("coop", "TDT / TRSi"),
    ("core", "CoRE"),
    ("copycats-inc", "CopyCats Inc"),
    ("coreutil", "The Utility Division of CORE"),
    ("crackpl", "CrackPL"),
    ("cybermail", "CyberMail"),
    ("dbcdemo", "DBCDemo"),
    ("dmacks-lost-classics", "Dmack's Lost Classics"),
    ("dreadloc", "DREADLoC"),
    ("dumptruck", "dumpTruck"),
    ("defacto2net", "Defacto2 website"),
    ("drm-ftp", "dRM FTP"),
    ("dst-ftp", "dst FTP"),
    ("dvniso", "DVNiSO"),
    ("dvtiso", "DVTiSO"),
    ("epic", "EPiC"),
    ("esp-pirates", "ESP Pirates"),
    ("extreme-net", "ExtremeNET"),
    ("excretion-anarchy", "eXCReTION"),
    ("fx2-graphics-group", "Fx/2 Graphics Group"),
    ("hashx", "Hash X"),
    ("htbzine", "HTBZine"),
    ("linezer0", "LineZer0"),
    ("lucid", "LuCiD"),
    ("ice-weekly-newsletter", "iCE Weekly Newsletter"),
    ("icon", "iCON"),
    ("imars", "iMARS"),
    ("jrp", "Japanese Release Project"),
    ("oneup", "OneUp"),
    ("orion", "ORiON"),
    ("mmi", "MMi"),
    ("mp2k", "MP2K"),
    ("nc_17", "NC-17"),
    ("nicjr", "NicJr"),
    ("noclass", "NoClass"),
    ("nofx-bbs", "NoFX BBS"),
    ("nukethis", "NukeThis"),
    ("numbers", "The Numbers"),
    ("nrp", "NoRePack"),
    ("paradox", "Paradox"),
    ("phoenixbbs", "Phoenix BBS"),
    ("pjs-tower-bbs", "PJs Tower BBS"),
    ("playme", "PlayMe"),
    ("pocketheaven", "PocketHeaven"),
    ("psico", "PSiCO"),
    ("ptl-club", "PTL Club"),
    ("pouet", "Pouët"),
    ("risciso", "RISCiSO"),
    ("sda-review", "SDA Review"),
    ("seek-n-destroy", "Seek n Destroy"),
    ("sma-posse", "SMA Posse"),
    ("shitonlygerman", "ShitOnlyGerman"),
    ("software-pirates-inc", "Software Pirates Inc"),
    ("surprise-productions", "Surprise! Productions"),
    ("syndicate", "$yndicate"),
    ("r2", "Rebels + 2000AD"),
    ("razordox", "RazorDOX"),
    ("rhvid", "RHViD"),
    ("rzsoft-ftp", "RZSoft FTP"),
    ("tkc*crackers-in-action", "tKC/Crackers in Action"),
    ("tdu_jam", "TDU Jam!"),
    ("team-xtx", "Team XTX"),
    ("thg-fx", "THG-FX"),
    ("tft-team", "TFT Team"),
    ("tpinc", "TPiNC"),
    ("trsi", "TRSi"),
    ("tristar-ampersand-red-sector-inc", "Tristar & Red Sector Inc"),
    ("the-dvdr-releasing-standards", "The DVDR Releasing Standards"),
    ("the-firm", "The FiRM"),
    ("tsg-ftp", "tSG FTP"),
    ("tport", "tPORt"),
    ("underpl", "UnderPL"),
    ("unreal-magazine", "UnReal Magazine"),
    ("united-software-association*fairlight", "United Software Association + Fairlight PC Division"),
    ("vdr-lake-ftp", "VDR Lake FTP"),
    ("well-release-anything", "We'll Release Anything"),
    ("uniq", "UNiQ"),
    ("ypogeios", "YPOGEiOS"),
    ("xdb", "X-db"),
    ("xquizit-ftp", "XquiziT FTP"),
    ("pnx", "Cyber Angels Phoenix"),
    ("cpi-newsletter", "CPI Newsletter"),
    ("warez", "WareZ"),
    ("mai-review", "MAi Review"),
    ("nuke-infojournal", "[NuKE] InfoJournal"),
    ("tsan-newsletter", "TSAN Newsletter"),
    ("vip-magazine", "ViP Magazine"),
    ("dmz-review", "DMZ Review"),
    ("mr-bane-800-number-list", "Mr. Bane's 800 Number List"),
    ("ware-report", "WARE Report"),
    ("apex-reviewers", "APEX Reviewers"),
    ("globelist-world-bbs-listing", "GlobeList World BBS Listing"),
    ("spetznas", "SpetzNas"),
    ("insomnia-emag", "iNSOMNiA E-Mag"),
    ("nofear-news", "NOFEAR News"),
    ("ram-newszine", "RAM Newszine"),
    ("scam-magazine", "SCAM! Magazine"),
    ("ntt", "ENTiTY"),
    ("eliteslst", "ELITES.LST"),
    ("radiant", "RADiANT"),
    ("genesis-ppe", "Genesis PPE"),
    ("genesis-404", "Genesis (404)"),
    ("poison", "POiSON"),
    ("natosoft", "NATOsoft"),
    ("scd_dox", "SCD-Dox"),
    ("bs-enterprize", "BS Enterprize"),
    ("ralph-productions", "RalPh Productions"),
    ("unknown-couriers", "The Unknöwn Couriers"),
    ("wat-courier-crew", "WAT Courier Crew"),
    ("usalliance", "USAlliance"),
    ("acronym", "ACRONYMINIM"),
    ("powr", "PoWR"),
    ("maim", "MAiM"),
    ("relic", "RELiC"),
    ("hipe", "HiPE"),
    ("spectral", "Spec┼raL"),
    ("rpim", "RPiM"),
    ("pri", "PRi"),
    ("starjammers", "StarJammers"),
    ("mobius", "Möbius"),
    ("eclipse-ca", "Eclipse (CA)"),
    ("bom-squad", "BOM Squad"),
    ("wildsiderz", "WildSider"),
    ("motorsoft", "MotorSoft"),
    ("scorpion", "Scorpion ¥"),
    ("pmr-productions", "PMR Productions"),
    ("micropirates-inc", "MicroPirates Inc"),
    ("bad-association", "BAD Association"),
    ("the-underground-council", "The UnderGround Council"),
    ("the-nameless-ones-1989", "The Nameless Ones (1989)"),
    ("trc-ware-report", "TRC Ware Report"),
];

/// URL paths of releasers whose names are written in all lowercase.
pub const LOWERCASE: &[&str] = &[
    "mci-escapes",
    "scenet",
    "notwikipedia",
    "xpress",
];

/// URL paths of releasers whose names are written in all uppercase.
pub const UPPERCASE: &[&str] = &[
    "icch",
    "mash",
    "casa",
    "orpa",
    "arts",
    "acronym",
    "jake",
    "ytmar",
    "edge",
    "ameriboards",
    "nuke",
    "bbslst",
    "thhg",
    "2nd2none-bbs",
    "3wa-bbs",
    "acb-bbs",
    "anz-ftp",
    "beer",
    "bcp-bbs",
    "cusa",
    "ckc-bbs",
    "cnx-ftp",
    "core",
    "crsiso",
    "cwl-bbs",
    "dv8-bbs",
    "es-bbs",
    "dread",
    "fake",
    "fate",
    "fic-bbs",
    "hasp",
    "lkcc",
    "lms-bbs",
    "ls-bbs",
    "lsdiso",
    "lpc-bbs",
    "lta-bbs",
    "lube",
    "mor-ftp",
    "msv-ftp",
    "new-dtl",
    "nsdap",
    "nohk",
    "nos-ftp",
    "og-bbs",
    "okc-bbs",
    "pe*trsi*tdt",
    "petra",
    "pplk",
    "pmc-bbs",
    "pp-bbs",
    "ppps-bbs",
    "pox-ftp",
    "ps5b",
    "psi-bbs",
    "qed-bbs",
    "reno",
    "scum",
    "swag",
    "scf-ftp",
    "scsi-ftp",
    "shot",
    "swat",
    "tiw-bbs",
    "tbb-ftp",
    "tcsm-bbs",
    "tfz-2-bbs",
    "triad",
    "toads",
    "tog-ftp",
    "top-ftp",
    "tph-qqt",
    "tph-qqt-ftp",
    "trt-2001-bbs",
    "tsi-bbs",
    "tsc-bbs",
    "uct-bbs",
    "u4ea-ftp",
    "x_ess",
    "zoo-ftp",
    "phoenix",
    "sprint",
];
