use crate::City;

/// Every city that gets its own landing page, in sitemap order.
pub const ROSTER: &[City] = &[
    City::new("New York", "NY"),
    City::new("Los Angeles", "CA"),
    City::new("Chicago", "IL"),
    City::new("Dallas", "TX"),
    City::new("Fort Worth", "TX"),
    City::new("Philadelphia", "PA"),
    City::new("Houston", "TX"),
    City::new("Atlanta", "GA"),
    City::new("Washington", "DC"),
    City::new("Hagerstown", "MD"),
    City::new("Boston", "MA"),
    City::new("Manchester", "NH"),
    City::new("San Francisco", "CA"),
    City::new("Oakland", "CA"),
    City::new("San Jose", "CA"),
    City::new("Tampa", "FL"),
    City::new("St. Petersburg", "FL"),
    City::new("Sarasota", "FL"),
    City::new("Phoenix", "AZ"),
    City::new("Prescott", "AZ"),
    City::new("Seattle", "WA"),
    City::new("Tacoma", "WA"),
    City::new("Detroit", "MI"),
    City::new("Orlando", "FL"),
    City::new("Daytona Beach", "FL"),
    City::new("Melbourne", "FL"),
    City::new("Minneapolis", "MN"),
    City::new("St. Paul", "MN"),
    City::new("Denver", "CO"),
    City::new("Miami", "FL"),
    City::new("Fort Lauderdale", "FL"),
    City::new("Cleveland", "OH"),
    City::new("Akron", "OH"),
    City::new("Canton", "OH"),
    City::new("Sacramento", "CA"),
    City::new("Stockton", "CA"),
    City::new("Modesto", "CA"),
    City::new("Charlotte", "NC"),
    City::new("Raleigh", "NC"),
    City::new("Durham", "NC"),
    City::new("Fayetteville", "NC"),
    City::new("Portland", "OR"),
    City::new("St. Louis", "MO"),
    City::new("Indianapolis", "IN"),
    City::new("Nashville", "TN"),
    City::new("Pittsburgh", "PA"),
    City::new("Salt Lake City", "UT"),
    City::new("Baltimore", "MD"),
    City::new("San Diego", "CA"),
    City::new("San Antonio", "TX"),
    City::new("Hartford", "CT"),
    City::new("New Haven", "CT"),
    City::new("Kansas City", "MO"),
    City::new("Austin", "TX"),
    City::new("Columbus", "OH"),
    City::new("Greenville", "SC"),
    City::new("Spartanburg", "SC"),
    City::new("Asheville", "NC"),
    City::new("Anderson", "SC"),
    City::new("Cincinnati", "OH"),
    City::new("Milwaukee", "WI"),
    City::new("West Palm Beach", "FL"),
    City::new("Fort Pierce", "FL"),
    City::new("Las Vegas", "NV"),
    City::new("Jacksonville", "FL"),
    City::new("Harrisburg", "PA"),
    City::new("Lancaster", "PA"),
    City::new("Lebanon", "PA"),
    City::new("York", "PA"),
    City::new("Grand Rapids", "MI"),
    City::new("Kalamazoo", "MI"),
    City::new("Battle Creek", "MI"),
    City::new("Norfolk", "VA"),
    City::new("Portsmouth", "VA"),
    City::new("Newport News", "VA"),
    City::new("Birmingham", "AL"),
    City::new("Anniston", "AL"),
    City::new("Tuscaloosa", "AL"),
    City::new("Greensboro", "NC"),
    City::new("High Point", "NC"),
    City::new("Winston-Salem", "NC"),
    City::new("Oklahoma City", "OK"),
    City::new("Albuquerque", "NM"),
    City::new("Santa Fe", "NM"),
    City::new("Louisville", "KY"),
    City::new("New Orleans", "LA"),
    City::new("Memphis", "TN"),
    City::new("Providence", "RI"),
    City::new("New Bedford", "MA"),
    City::new("Fort Myers", "FL"),
    City::new("Naples", "FL"),
    City::new("Buffalo", "NY"),
    City::new("Fresno", "CA"),
    City::new("Visalia", "CA"),
    City::new("Richmond", "VA"),
    City::new("Petersburg", "VA"),
    City::new("Mobile", "AL"),
    City::new("Pensacola", "FL"),
    City::new("Fort Walton Beach", "FL"),
    City::new("Little Rock", "AR"),
    City::new("Pine Bluff", "AR"),
    City::new("Wilkes-Barre", "PA"),
    City::new("Scranton", "PA"),
    City::new("Hazleton", "PA"),
    City::new("Knoxville", "TN"),
    City::new("Tulsa", "OK"),
    City::new("Albany", "NY"),
    City::new("Schenectady", "NY"),
    City::new("Troy", "NY"),
    City::new("Lexington", "KY"),
    City::new("Dayton", "OH"),
    City::new("Tucson", "AZ"),
    City::new("Sierra Vista", "AZ"),
    City::new("Spokane", "WA"),
    City::new("Des Moines", "IA"),
    City::new("Ames", "IA"),
    City::new("Green Bay", "WI"),
    City::new("Appleton", "WI"),
    City::new("Honolulu", "HI"),
    City::new("Roanoke", "VA"),
    City::new("Lynchburg", "VA"),
    City::new("Wichita", "KS"),
    City::new("Hutchinson", "KS"),
    City::new("Flint", "MI"),
    City::new("Saginaw", "MI"),
    City::new("Bay City", "MI"),
    City::new("Omaha", "NE"),
    City::new("Springfield", "MO"),
    City::new("Huntsville", "AL"),
    City::new("Decatur", "AL"),
    City::new("Florence", "AL"),
    City::new("Columbia", "SC"),
    City::new("Madison", "WI"),
    City::new("Portland", "ME"),
    City::new("Auburn", "ME"),
    City::new("Rochester", "NY"),
    City::new("Harlingen", "TX"),
    City::new("Weslaco", "TX"),
    City::new("Brownsville", "TX"),
    City::new("McAllen", "TX"),
    City::new("Toledo", "OH"),
    City::new("Charleston", "WV"),
    City::new("Huntington", "WV"),
    City::new("Waco", "TX"),
    City::new("Temple", "TX"),
    City::new("Bryan", "TX"),
    City::new("Savannah", "GA"),
    City::new("Charleston", "SC"),
    City::new("Chattanooga", "TN"),
    City::new("Colorado Springs", "CO"),
    City::new("Pueblo", "CO"),
    City::new("Syracuse", "NY"),
    City::new("El Paso", "TX"),
    City::new("Las Cruces", "NM"),
    City::new("Paducah", "KY"),
    City::new("Cape Girardeau", "MO"),
    City::new("Harrisburg", "IL"),
    City::new("Shreveport", "LA"),
    City::new("Texarkana", "TX"),
    City::new("Champaign", "IL"),
    City::new("Urbana", "IL"),
    City::new("Springfield", "IL"),
    City::new("Decatur", "IL"),
    City::new("Burlington", "VT"),
    City::new("Plattsburgh", "NY"),
    City::new("Cedar Rapids", "IA"),
    City::new("Waterloo", "IA"),
    City::new("Iowa City", "IA"),
    City::new("Dubuque", "IA"),
    City::new("Baton Rouge", "LA"),
    City::new("Fort Smith", "AR"),
    City::new("Fayetteville", "AR"),
    City::new("Springdale", "AR"),
    City::new("Rogers", "AR"),
    City::new("Myrtle Beach", "SC"),
    City::new("Florence", "SC"),
    City::new("Boise", "ID"),
    City::new("Jackson", "MS"),
    City::new("South Bend", "IN"),
    City::new("Elkhart", "IN"),
    City::new("Johnson City", "TN"),
    City::new("Kingsport", "TN"),
    City::new("Bristol", "VA"),
    City::new("Greenville", "NC"),
    City::new("New Bern", "NC"),
    City::new("Washington", "NC"),
    City::new("Reno", "NV"),
    City::new("Davenport", "IA"),
    City::new("Rock Island", "IL"),
    City::new("Moline", "IL"),
    City::new("Tallahassee", "FL"),
    City::new("Thomasville", "GA"),
    City::new("Tyler", "TX"),
    City::new("Longview", "TX"),
    City::new("Lufkin", "TX"),
    City::new("Nacogdoches", "TX"),
    City::new("Lincoln", "NE"),
    City::new("Hastings", "NE"),
    City::new("Kearney", "NE"),
    City::new("Augusta", "GA"),
    City::new("Aiken", "SC"),
    City::new("Evansville", "IN"),
    City::new("Fort Wayne", "IN"),
    City::new("Sioux Falls", "SD"),
    City::new("Mitchell", "SD"),
    City::new("Johnstown", "PA"),
    City::new("Altoona", "PA"),
    City::new("State College", "PA"),
    City::new("Fargo", "ND"),
    City::new("Valley City", "ND"),
    City::new("Yakima", "WA"),
    City::new("Pasco", "WA"),
    City::new("Richland", "WA"),
    City::new("Kennewick", "WA"),
    City::new("Springfield", "MA"),
    City::new("Holyoke", "MA"),
    City::new("Traverse City", "MI"),
    City::new("Cadillac", "MI"),
    City::new("Lansing", "MI"),
    City::new("Youngstown", "OH"),
    City::new("Macon", "GA"),
    City::new("Eugene", "OR"),
    City::new("Montgomery", "AL"),
    City::new("Selma", "AL"),
    City::new("Peoria", "IL"),
    City::new("Bloomington", "IL"),
    City::new("Santa Barbara", "CA"),
    City::new("Santa Maria", "CA"),
    City::new("San Luis Obispo", "CA"),
    City::new("Lafayette", "LA"),
    City::new("Bakersfield", "CA"),
    City::new("Wilmington", "NC"),
    City::new("Columbus", "GA"),
    City::new("Monterey", "CA"),
    City::new("Salinas", "CA"),
    City::new("La Crosse", "WI"),
    City::new("Eau Claire", "WI"),
    City::new("Corpus Christi", "TX"),
    City::new("Salisbury", "MD"),
    City::new("Amarillo", "TX"),
    City::new("Wausau", "WI"),
    City::new("Rhinelander", "WI"),
    City::new("Columbus", "MS"),
    City::new("Tupelo", "MS"),
    City::new("West Point", "MS"),
    City::new("Starkville", "MS"),
    City::new("Columbia", "MO"),
    City::new("Jefferson City", "MO"),
    City::new("Chico", "CA"),
    City::new("Redding", "CA"),
    City::new("Rockford", "IL"),
    City::new("Duluth", "MN"),
    City::new("Superior", "WI"),
    City::new("Medford", "OR"),
    City::new("Klamath Falls", "OR"),
    City::new("Lubbock", "TX"),
    City::new("Topeka", "KS"),
    City::new("Monroe", "LA"),
    City::new("El Dorado", "AR"),
    City::new("Beaumont", "TX"),
    City::new("Port Arthur", "TX"),
    City::new("Odessa", "TX"),
    City::new("Midland", "TX"),
    City::new("Palm Springs", "CA"),
    City::new("Anchorage", "AK"),
    City::new("Minot", "ND"),
    City::new("Bismarck", "ND"),
    City::new("Dickinson", "ND"),
    City::new("Williston", "ND"),
    City::new("Panama City", "FL"),
    City::new("Sioux City", "IA"),
    City::new("Wichita Falls", "TX"),
    City::new("Lawton", "OK"),
    City::new("Joplin", "MO"),
    City::new("Pittsburg", "KS"),
    City::new("Albany", "GA"),
    City::new("Rochester", "MN"),
    City::new("Mason City", "IA"),
    City::new("Austin", "MN"),
    City::new("Erie", "PA"),
    City::new("Idaho Falls", "ID"),
    City::new("Pocatello", "ID"),
    City::new("Jackson", "WY"),
    City::new("Bangor", "ME"),
    City::new("Gainesville", "FL"),
    City::new("Biloxi", "MS"),
    City::new("Gulfport", "MS"),
    City::new("Terre Haute", "IN"),
    City::new("Sherman", "TX"),
    City::new("Ada", "OK"),
    City::new("Missoula", "MT"),
    City::new("Binghamton", "NY"),
    City::new("Wheeling", "WV"),
    City::new("Steubenville", "OH"),
    City::new("Yuma", "AZ"),
    City::new("El Centro", "CA"),
    City::new("Billings", "MT"),
    City::new("Abilene", "TX"),
    City::new("Sweetwater", "TX"),
    City::new("Bluefield", "WV"),
    City::new("Beckley", "WV"),
    City::new("Oak Hill", "WV"),
    City::new("Hattiesburg", "MS"),
    City::new("Laurel", "MS"),
    City::new("Rapid City", "SD"),
    City::new("Dothan", "AL"),
    City::new("Utica", "NY"),
    City::new("Clarksburg", "WV"),
    City::new("Weston", "WV"),
    City::new("Harrisonburg", "VA"),
    City::new("Jackson", "TN"),
    City::new("Quincy", "IL"),
    City::new("Hannibal", "MO"),
    City::new("Keokuk", "IA"),
    City::new("Charlottesville", "VA"),
    City::new("Lake Charles", "LA"),
    City::new("Elmira", "NY"),
    City::new("Corning", "NY"),
    City::new("Watertown", "NY"),
    City::new("Bowling Green", "KY"),
    City::new("Marquette", "MI"),
    City::new("Jonesboro", "AR"),
    City::new("Alexandria", "LA"),
    City::new("Laredo", "TX"),
    City::new("Butte", "MT"),
    City::new("Bozeman", "MT"),
    City::new("Bend", "OR"),
    City::new("Grand Junction", "CO"),
    City::new("Montrose", "CO"),
    City::new("Twin Falls", "ID"),
    City::new("Lafayette", "IN"),
    City::new("Lima", "OH"),
    City::new("Great Falls", "MT"),
    City::new("Meridian", "MS"),
    City::new("Cheyenne", "WY"),
    City::new("Scottsbluff", "NE"),
    City::new("Parkersburg", "WV"),
    City::new("Greenwood", "MS"),
    City::new("Greenville", "MS"),
    City::new("Eureka", "CA"),
    City::new("San Angelo", "TX"),
    City::new("Casper", "WY"),
    City::new("Riverton", "WY"),
    City::new("Mankato", "MN"),
    City::new("Ottumwa", "IA"),
    City::new("Kirksville", "MO"),
    City::new("St. Joseph", "MO"),
    City::new("Fairbanks", "AK"),
    City::new("Zanesville", "OH"),
    City::new("Victoria", "TX"),
    City::new("Helena", "MT"),
    City::new("Presque Isle", "ME"),
    City::new("Juneau", "AK"),
    City::new("Alpena", "MI"),
    City::new("North Platte", "NE"),
    City::new("Glendive", "MT"),
];

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn roster_slugs_are_well_formed() {
        for city in ROSTER {
            let slug = city.slug();
            assert!(!slug.is_empty(), "empty slug for {}", city);
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{}", slug);
            assert!(!slug.contains("--"), "{}", slug);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{}",
                slug
            );
        }
    }

    #[test]
    fn roster_paths_are_unique() {
        let mut seen: HashMap<String, &City> = HashMap::new();
        for city in ROSTER {
            if let Some(first) = seen.insert(city.path(), city) {
                panic!("{} and {} share {}", first, city, city.path());
            }
        }
        assert_eq!(seen.len(), ROSTER.len());
    }

    #[test]
    fn same_city_name_in_different_states_stays_distinct() {
        let dc = City::new("Washington", "DC");
        let nc = City::new("Washington", "NC");
        assert_eq!(dc.slug(), "washington-dc");
        assert_eq!(nc.slug(), "washington-nc");
        assert_ne!(dc.path(), nc.path());
    }
}
