// crates/flagdb-core/src/builder/color_table.rs

//! Static lookup tables merged into the fetched country data.

/// Curated primary colors per flag, keyed by ISO2 code and sorted by code.
pub static FLAG_COLORS: &[(&str, &[&str])] = &[
    ("AD", &["#0018A8", "#FEDF00", "#D52B1E"]),
    ("AE", &["#00732F", "#FFFFFF", "#FF0000", "#000000"]),
    ("AF", &["#000000", "#D32011", "#007A36", "#FFFFFF"]),
    ("AG", &["#000000", "#FCD116", "#CE1126", "#0072C6", "#FFFFFF"]),
    ("AI", &["#012169", "#FFFFFF", "#C8102E"]),
    ("AL", &["#E41E20", "#000000"]),
    ("AM", &["#D90012", "#0033A0", "#F2A800"]),
    ("AO", &["#CC092F", "#000000", "#FFCC00"]),
    ("AR", &["#74ACDF", "#FFFFFF", "#FCBF49"]),
    ("AS", &["#002B7F", "#FFFFFF", "#BF0A30"]),
    ("AT", &["#ED2939", "#FFFFFF"]),
    ("AU", &["#012169", "#FFFFFF", "#E4002B"]),
    ("AW", &["#4189DD", "#F9E814", "#FFFFFF", "#ED2939"]),
    ("AX", &["#0053A5", "#FECC00", "#DA291C"]),
    ("AZ", &["#0092BC", "#E4002B", "#00AF66", "#FFFFFF"]),
    ("BA", &["#002395", "#FECB00", "#FFFFFF"]),
    ("BB", &["#00267F", "#FFC726", "#000000"]),
    ("BD", &["#006A4E", "#F42A41"]),
    ("BE", &["#000000", "#FAE042", "#ED2939"]),
    ("BF", &["#009E49", "#EF2B2D", "#FCD116"]),
    ("BG", &["#FFFFFF", "#00966E", "#D62612"]),
    ("BH", &["#FFFFFF", "#CE1126"]),
    ("BI", &["#CE1126", "#1EB53A", "#FFFFFF"]),
    ("BJ", &["#008751", "#FCD116", "#E8112D"]),
    ("BL", &["#002395", "#FFFFFF", "#ED2939"]),
    ("BM", &["#CF142B", "#FFFFFF", "#012169"]),
    ("BN", &["#F7E017", "#FFFFFF", "#000000", "#CF1020"]),
    ("BO", &["#D52B1E", "#F9E300", "#007934"]),
    ("BR", &["#009C3B", "#FFDF00", "#002776", "#FFFFFF"]),
    ("BS", &["#00ABC9", "#FFC72C", "#000000"]),
    ("BT", &["#FF4E12", "#FFD520", "#FFFFFF"]),
    ("BW", &["#75AADB", "#FFFFFF", "#000000"]),
    ("BY", &["#C8313E", "#4AA657", "#FFFFFF"]),
    ("BZ", &["#003F87", "#CE1126", "#FFFFFF"]),
    ("CA", &["#FF0000", "#FFFFFF"]),
    ("CC", &["#008000", "#FFFF00", "#000000"]),
    ("CD", &["#007FFF", "#F7D618", "#CE1021"]),
    ("CF", &["#003082", "#FFFFFF", "#289728", "#FFCE00", "#D21034"]),
    ("CG", &["#009543", "#FBDE4A", "#DC241F"]),
    ("CH", &["#DA291C", "#FFFFFF"]),
    ("CI", &["#F77F00", "#FFFFFF", "#009E60"]),
    ("CK", &["#012169", "#FFFFFF", "#C8102E"]),
    ("CL", &["#0039A6", "#FFFFFF", "#D52B1E"]),
    ("CM", &["#007A5E", "#CE1126", "#FCD116"]),
    ("CN", &["#DE2910", "#FFDE00"]),
    ("CO", &["#FCD116", "#003893", "#CE1126"]),
    ("CR", &["#002B7F", "#FFFFFF", "#CE1126"]),
    ("CU", &["#002A8F", "#FFFFFF", "#CB1515"]),
    ("CV", &["#003893", "#FFFFFF", "#CF2027", "#F7D116"]),
    ("CW", &["#002B7F", "#F9E814", "#FFFFFF"]),
    ("CX", &["#0021AD", "#1C8A42", "#FFFFFF", "#F9D616"]),
    ("CY", &["#FFFFFF", "#D47600", "#4E5B31"]),
    ("CZ", &["#D7141A", "#FFFFFF", "#11457E"]),
    ("DE", &["#000000", "#DD0000", "#FFCE00"]),
    ("DJ", &["#6AB2E7", "#12AD2B", "#FFFFFF", "#D7141A"]),
    ("DK", &["#C60C30", "#FFFFFF"]),
    ("DM", &["#006B3F", "#FCD116", "#FFFFFF", "#000000", "#D41C30", "#9461C9"]),
    ("DO", &["#002D62", "#CE1126", "#FFFFFF"]),
    ("DZ", &["#006233", "#FFFFFF", "#D21034"]),
    ("EC", &["#FFE100", "#0033A0", "#CE1126"]),
    ("EE", &["#0072CE", "#000000", "#FFFFFF"]),
    ("EG", &["#CE1126", "#FFFFFF", "#000000", "#C09300"]),
    ("EH", &["#000000", "#FFFFFF", "#007A3D", "#C4111B"]),
    ("ER", &["#4189DD", "#EA0437", "#12AD2B", "#FFC72C"]),
    ("ES", &["#C60B1E", "#FFC400"]),
    ("ET", &["#078930", "#FCDD09", "#DA121A", "#0F47AF"]),
    ("FI", &["#FFFFFF", "#003580"]),
    ("FJ", &["#68BFE5", "#FFFFFF", "#002868", "#CF1628"]),
    ("FK", &["#002395", "#FFFFFF"]),
    ("FM", &["#6797D6", "#FFFFFF"]),
    ("FO", &["#FFFFFF", "#005EB8", "#EF303E"]),
    ("FR", &["#002395", "#FFFFFF", "#ED2939"]),
    ("GA", &["#009E60", "#FCD116", "#3A75C4"]),
    ("GB", &["#012169", "#FFFFFF", "#C8102E"]),
    ("GD", &["#CE1126", "#FCD116", "#007A5E"]),
    ("GE", &["#FFFFFF", "#FF0000"]),
    ("GF", &["#002395", "#FFFFFF", "#ED2939"]),
    ("GG", &["#FFFFFF", "#E8112D", "#F9DD16"]),
    ("GH", &["#EF2929", "#FCD116", "#006B3F", "#000000"]),
    ("GI", &["#FFFFFF", "#DA000C"]),
    ("GL", &["#FFFFFF", "#D00C33"]),
    ("GM", &["#3A7728", "#FFFFFF", "#CE1126", "#0C1C8C"]),
    ("GN", &["#CE1126", "#FCD116", "#009460"]),
    ("GP", &["#002395", "#FFFFFF", "#ED2939"]),
    ("GQ", &["#3E9A00", "#FFFFFF", "#E32118", "#0073CE"]),
    ("GR", &["#0D5EAF", "#FFFFFF"]),
    ("GT", &["#4997D0", "#FFFFFF"]),
    ("GU", &["#002387", "#CE2029", "#FFFFFF"]),
    ("GW", &["#CE1126", "#FCD116", "#009E49", "#000000"]),
    ("GY", &["#009E49", "#FFFFFF", "#FCD116", "#CE1126", "#000000"]),
    ("HK", &["#DE2910", "#FFFFFF"]),
    ("HN", &["#0073CF", "#FFFFFF"]),
    ("HR", &["#FF0000", "#FFFFFF", "#171796"]),
    ("HT", &["#00209F", "#D21034", "#FFFFFF"]),
    ("HU", &["#CD2A3E", "#FFFFFF", "#436F4D"]),
    ("ID", &["#FF0000", "#FFFFFF"]),
    ("IE", &["#169B62", "#FFFFFF", "#FF883E"]),
    ("IL", &["#FFFFFF", "#0038B8"]),
    ("IM", &["#CF142B", "#FFFFFF"]),
    ("IN", &["#FF9933", "#FFFFFF", "#138808", "#000080"]),
    ("IO", &["#002395", "#FFFFFF"]),
    ("IQ", &["#CE1126", "#FFFFFF", "#007A3D", "#000000"]),
    ("IR", &["#239F40", "#FFFFFF", "#DA0000"]),
    ("IS", &["#02529C", "#FFFFFF", "#DC1E35"]),
    ("IT", &["#009246", "#FFFFFF", "#CE2B37"]),
    ("JE", &["#FFFFFF", "#DF112D", "#F9DD16"]),
    ("JM", &["#009B3A", "#FED100", "#000000"]),
    ("JO", &["#000000", "#FFFFFF", "#007A3D", "#CE1126"]),
    ("JP", &["#FFFFFF", "#BC002D"]),
    ("KE", &["#000000", "#BB0000", "#006600", "#FFFFFF"]),
    ("KG", &["#E8112D", "#FFEF00"]),
    ("KH", &["#032EA1", "#E00025", "#FFFFFF"]),
    ("KI", &["#CE1126", "#002B7F", "#FCD116", "#FFFFFF"]),
    ("KM", &["#3A8E40", "#FFFFFF", "#FFC61E", "#CE1126", "#3D5897"]),
    ("KN", &["#009E49", "#FCD116", "#CE1126", "#000000", "#FFFFFF"]),
    ("KP", &["#024FA2", "#FFFFFF", "#ED1C27"]),
    ("KR", &["#FFFFFF", "#CD2E3A", "#0047A0", "#000000"]),
    ("KW", &["#007A3D", "#FFFFFF", "#CE1126", "#000000"]),
    ("KY", &["#002395", "#FFFFFF", "#CF142B"]),
    ("KZ", &["#00AFCA", "#FEC50C"]),
    ("LA", &["#CE1126", "#002868", "#FFFFFF"]),
    ("LB", &["#ED1C24", "#FFFFFF", "#00A651"]),
    ("LC", &["#65CFFF", "#FCD116", "#000000", "#FFFFFF"]),
    ("LI", &["#002B7F", "#CE1126", "#FFD83D"]),
    ("LK", &["#8D153A", "#FFB700", "#EB7400", "#005641"]),
    ("LR", &["#BF0A30", "#002868", "#FFFFFF"]),
    ("LS", &["#00209F", "#FFFFFF", "#009543", "#000000"]),
    ("LT", &["#FDB913", "#006A44", "#C1272D"]),
    ("LU", &["#00A2E1", "#ED2939", "#FFFFFF"]),
    ("LV", &["#9E3039", "#FFFFFF"]),
    ("LY", &["#000000", "#239E46", "#E70013"]),
    ("MA", &["#C1272D", "#006233"]),
    ("MC", &["#CE1126", "#FFFFFF"]),
    ("MD", &["#0046AE", "#FFD200", "#CC092F"]),
    ("ME", &["#C40308", "#D4AF37"]),
    ("MF", &["#002395", "#FFFFFF", "#ED2939"]),
    ("MG", &["#FFFFFF", "#007E3A", "#FC3D32"]),
    ("MH", &["#003893", "#FFFFFF", "#DD7500"]),
    ("MK", &["#D20000", "#FFE600"]),
    ("ML", &["#14B53A", "#FCD116", "#CE1126"]),
    ("MM", &["#FECB00", "#34B233", "#EA2839", "#FFFFFF"]),
    ("MN", &["#C4272F", "#015197", "#F9CF02"]),
    ("MO", &["#00785E", "#FFFFFF"]),
    ("MP", &["#0071BC", "#FFFFFF"]),
    ("MQ", &["#002395", "#FFFFFF", "#ED2939"]),
    ("MR", &["#006233", "#FFD700", "#C1272D"]),
    ("MS", &["#002395", "#FFFFFF", "#C8102E"]),
    ("MT", &["#FFFFFF", "#CF142B"]),
    ("MU", &["#00A551", "#FFD500", "#EA2839", "#131A6D"]),
    ("MV", &["#D21034", "#007E3A", "#FFFFFF"]),
    ("MW", &["#000000", "#CE1126", "#339E35"]),
    ("MX", &["#006341", "#FFFFFF", "#CE1126"]),
    ("MY", &["#CC0001", "#FFFFFF", "#010066", "#FFCC00"]),
    ("MZ", &["#009A44", "#000000", "#FCE100", "#D21034", "#FFFFFF"]),
    ("NA", &["#003580", "#D21034", "#009A44", "#FFFFFF", "#FFE700"]),
    ("NC", &["#002395", "#FFFFFF", "#ED2939"]),
    ("NE", &["#E05206", "#FFFFFF", "#0DB02B"]),
    ("NF", &["#00A651", "#FFFFFF"]),
    ("NG", &["#008751", "#FFFFFF"]),
    ("NI", &["#0067C6", "#FFFFFF"]),
    ("NL", &["#AE1C28", "#FFFFFF", "#21468B"]),
    ("NO", &["#EF2B2D", "#FFFFFF", "#002868"]),
    ("NP", &["#DC143C", "#003893", "#FFFFFF"]),
    ("NR", &["#012A6B", "#FFC61E", "#FFFFFF"]),
    ("NU", &["#FFC72C", "#012169", "#FFFFFF"]),
    ("NZ", &["#012169", "#FFFFFF", "#C8102E"]),
    ("OM", &["#DB161B", "#FFFFFF", "#008000"]),
    ("PA", &["#FFFFFF", "#DA121A", "#072357"]),
    ("PE", &["#D91023", "#FFFFFF"]),
    ("PF", &["#FFFFFF", "#ED2939", "#002395"]),
    ("PG", &["#000000", "#CE1126", "#FCD116", "#FFFFFF"]),
    ("PH", &["#0038A8", "#CE1126", "#FCD116", "#FFFFFF"]),
    ("PK", &["#01411C", "#FFFFFF"]),
    ("PL", &["#FFFFFF", "#DC143C"]),
    ("PM", &["#002395", "#FFFFFF", "#ED2939"]),
    ("PN", &["#012169", "#FFFFFF"]),
    ("PR", &["#CC0000", "#FFFFFF", "#0050F0"]),
    ("PS", &["#000000", "#FFFFFF", "#007A3D", "#CE1126"]),
    ("PT", &["#006600", "#FF0000", "#FFFF00", "#FFFFFF"]),
    ("PW", &["#4AADD6", "#FFDE00"]),
    ("PY", &["#D52B1E", "#FFFFFF", "#0038A8"]),
    ("QA", &["#8D1B3D", "#FFFFFF"]),
    ("RE", &["#002395", "#FFFFFF", "#ED2939"]),
    ("RO", &["#002B7F", "#FCD116", "#CE1126"]),
    ("RS", &["#C6363C", "#0C4076", "#FFFFFF", "#EEAD2D"]),
    ("RU", &["#FFFFFF", "#0039A6", "#D52B1E"]),
    ("RW", &["#20603D", "#FAD201", "#00A1DE"]),
    ("SA", &["#006C35", "#FFFFFF"]),
    ("SB", &["#0051BA", "#FCD116", "#215B33", "#FFFFFF"]),
    ("SC", &["#003F87", "#FCD856", "#D62828", "#FFFFFF", "#007A3D"]),
    ("SD", &["#D21034", "#FFFFFF", "#007229", "#000000"]),
    ("SE", &["#006AA7", "#FECC02"]),
    ("SG", &["#ED2939", "#FFFFFF"]),
    ("SH", &["#012169", "#FFFFFF"]),
    ("SI", &["#FFFFFF", "#005DA4", "#ED1C24"]),
    ("SJ", &["#EF2B2D", "#FFFFFF", "#002868"]),
    ("SK", &["#FFFFFF", "#0B4EA2", "#EE1C25"]),
    ("SL", &["#1EB53A", "#FFFFFF", "#0072C6"]),
    ("SM", &["#FFFFFF", "#5EB6E4"]),
    ("SN", &["#00853F", "#FDEF42", "#E31B23"]),
    ("SO", &["#4189DD", "#FFFFFF"]),
    ("SR", &["#377E3F", "#FFFFFF", "#B40A2D", "#ECC81D"]),
    ("SS", &["#000000", "#DA121A", "#078930", "#FFFFFF", "#0F47AF", "#FCDD09"]),
    ("ST", &["#12AD2B", "#FFCE00", "#D21034", "#000000"]),
    ("SV", &["#0F47AF", "#FFFFFF"]),
    ("SX", &["#002395", "#FFFFFF", "#ED2939"]),
    ("SY", &["#CE1126", "#FFFFFF", "#000000", "#007A3D"]),
    ("SZ", &["#3E5EB9", "#FFD900", "#CE1126", "#000000", "#FFFFFF"]),
    ("TC", &["#012169", "#FFFFFF"]),
    ("TD", &["#002664", "#FECB00", "#C60C30"]),
    ("TF", &["#002395", "#FFFFFF", "#ED2939"]),
    ("TG", &["#006A4E", "#FFCE00", "#D21034", "#FFFFFF"]),
    ("TH", &["#A51931", "#F4F5F8", "#2D2A4A"]),
    ("TJ", &["#CC0000", "#FFFFFF", "#006600", "#F8C300"]),
    ("TK", &["#003893", "#FFCC00", "#FFFFFF"]),
    ("TL", &["#DC241F", "#000000", "#FFCE00", "#FFFFFF"]),
    ("TM", &["#28AE66", "#FFFFFF", "#D22630"]),
    ("TN", &["#E70013", "#FFFFFF"]),
    ("TO", &["#C10000", "#FFFFFF"]),
    ("TR", &["#E30A17", "#FFFFFF"]),
    ("TT", &["#CE1126", "#FFFFFF", "#000000"]),
    ("TV", &["#00247D", "#FFCE00", "#FFFFFF"]),
    ("TW", &["#FE0000", "#000095", "#FFFFFF"]),
    ("TZ", &["#00A3DD", "#FCD116", "#1EB53A", "#000000"]),
    ("UA", &["#005BBB", "#FFD500"]),
    ("UG", &["#000000", "#FCDC04", "#D90000", "#FFFFFF"]),
    ("US", &["#B31942", "#FFFFFF", "#0A3161"]),
    ("UY", &["#0038A8", "#FFFFFF", "#FCD116"]),
    ("UZ", &["#0099B5", "#FFFFFF", "#1EB53A", "#CE1126"]),
    ("VA", &["#FFE000", "#FFFFFF"]),
    ("VC", &["#0072C6", "#FCD116", "#009E60"]),
    ("VE", &["#FCE300", "#003DA5", "#EF3340", "#FFFFFF"]),
    ("VG", &["#012169", "#FFFFFF"]),
    ("VI", &["#FFFFFF", "#0050A0", "#FCE300"]),
    ("VN", &["#DA251D", "#FFFF00"]),
    ("VU", &["#009543", "#D21034", "#FDCE12", "#000000"]),
    ("WF", &["#002395", "#FFFFFF", "#ED2939"]),
    ("WS", &["#CE1126", "#002B7F", "#FFFFFF"]),
    ("XK", &["#244AA5", "#D0A650", "#FFFFFF"]),
    ("YE", &["#CE1126", "#FFFFFF", "#000000"]),
    ("YT", &["#002395", "#FFFFFF", "#ED2939"]),
    ("ZA", &["#002395", "#DE3831", "#007A4D", "#FFB612", "#FFFFFF", "#000000"]),
    ("ZM", &["#198A00", "#DE2010", "#000000", "#EF7D00"]),
    ("ZW", &["#006400", "#FFD200", "#D40000", "#000000", "#FFFFFF"]),
];

/// Continent labels as reported upstream, mapped to the names the catalog uses.
pub static CONTINENT_MAP: &[(&str, &str)] = &[
    ("Africa", "Africa"),
    ("Antarctica", "Antarctica"),
    ("Asia", "Asia"),
    ("Europe", "Europe"),
    ("North America", "North America"),
    ("Oceania", "Oceania"),
    ("South America", "South America"),
];

/// Label used when the upstream record lists no continent.
pub const UNKNOWN_CONTINENT: &str = "Unknown";

/// Curated colors for `code`, or an empty slice when the flag is not curated.
pub fn colors_for(code: &str) -> &'static [&'static str] {
    FLAG_COLORS
        .binary_search_by(|(c, _)| c.cmp(&code))
        .map(|i| FLAG_COLORS[i].1)
        .unwrap_or(&[])
}

/// Normalizes the first listed continent; unmapped labels pass through.
pub fn normalize_continent(continents: &[String]) -> String {
    let Some(first) = continents.first() else {
        return UNKNOWN_CONTINENT.to_string();
    };
    CONTINENT_MAP
        .iter()
        .find(|(from, _)| *from == first.as_str())
        .map(|(_, to)| (*to).to_string())
        .unwrap_or_else(|| first.clone())
}
