//! Statutory citations and fixed guidance text referenced by the evaluators.

pub(crate) const ABUSER_STATUS: &str = "INA § 204(a)(1)(A)(iii), (B)(ii); 8 CFR § 204.2(c)(1)(i)";
pub(crate) const ABUSER_LOST_STATUS: &str =
    "INA § 204(a)(1)(A)(iii)(II)(aa)(CC)(bbb), (B)(ii)(II)(aa)(CC)(aaa)";
pub(crate) const MARITAL_STATUS: &str = "INA § 204(a)(1)(A)(iii)(II)(aa)(CC); 8 CFR § 204.2(c)(1)(ii)";
pub(crate) const REMARRIAGE: &str = "INA § 204(h); 8 CFR § 204.2(c)(1)(ii)";
pub(crate) const MARRIAGE_VALIDITY: &str = "INA § 204(a)(1)(A)(iii)(II)(aa)(BB)";
pub(crate) const BONA_FIDE_MARRIAGE: &str = "INA § 204(a)(1)(A)(iii)(I)(aa); 8 CFR § 204.2(c)(1)(ix)";
pub(crate) const CHILD_AGE: &str = "INA § 204(a)(1)(D)(v); 8 CFR § 204.2(e)(1)(i)";
pub(crate) const CHILD_UNMARRIED: &str = "INA § 101(b)(1); 8 CFR § 204.2(e)(1)(i)";
pub(crate) const PARENT_CHILD_RELATIONSHIP: &str = "INA § 101(b)(1)(A)-(E); 8 CFR § 204.2(e)(2)(ii)";
pub(crate) const PARENT_OF_CITIZEN: &str = "INA § 204(a)(1)(A)(vii)";
pub(crate) const ABUSER_OVER_21: &str = "INA § 201(b)(2)(A)(i); INA § 204(a)(1)(A)(vii)";
pub(crate) const QUALIFYING_ABUSE: &str = "8 CFR § 204.2(c)(1)(vi), (e)(1)(vi)";
pub(crate) const SHARED_RESIDENCE: &str = "INA § 204(a)(1)(A)(iii)(II)(dd); 8 CFR § 204.2(c)(1)(v)";
pub(crate) const CHILD_VISITATION: &str = "8 CFR § 204.2(e)(1)(v); USCIS Policy Manual Vol. 3, Pt. D, Ch. 2";
pub(crate) const AGGRAVATED_FELONY: &str = "INA § 101(f)(8)";
pub(crate) const PERSECUTION: &str = "INA § 101(f)(9)";
pub(crate) const CONDITIONAL_BARS: &str = "INA § 101(f)(3), (6), (7); INA § 204(a)(1)(C)";
pub(crate) const GOOD_MORAL_CHARACTER: &str = "INA § 101(f); 8 CFR § 204.2(c)(1)(vii)";
pub(crate) const PHYSICAL_PRESENCE: &str = "INA § 204(a)(1)(A)(v)";

pub(crate) const TOP_LEVEL_BASIS: [&str; 3] = [
    "Violence Against Women Act self-petition, INA § 204(a)(1)(A)-(B)",
    "Form I-360 eligibility regulations, 8 CFR § 204.2(c) (spouses) and (e) (children)",
    "Any credible evidence standard, INA § 204(a)(1)(J); 8 CFR § 204.2(c)(2)(i)",
];

pub(crate) const ALTERNATIVE_U_VISA: &str =
    "U nonimmigrant status (Form I-918) for victims of qualifying crimes who assist law enforcement";
pub(crate) const ALTERNATIVE_T_VISA: &str =
    "T nonimmigrant status (Form I-914) if the abuse involved trafficking or forced labor";
pub(crate) const ALTERNATIVE_CANCELLATION: &str =
    "Special rule cancellation of removal for battered spouses and children, INA § 240A(b)(2)";
pub(crate) const ALTERNATIVE_SIJS: &str =
    "Special Immigrant Juvenile Status if a state court finds reunification with a parent is not viable";

pub(crate) const FALLBACK_ALTERNATIVES: [&str; 3] = [
    ALTERNATIVE_U_VISA,
    ALTERNATIVE_T_VISA,
    "Asylum or other humanitarian protection consultation with an immigration attorney",
];

pub(crate) const ELIGIBLE_NEXT_STEPS: [&str; 4] = [
    "Gather evidence of the qualifying relationship, the abuse, shared residence, and good moral character",
    "Prepare a detailed personal declaration describing the relationship and the abuse",
    "File Form I-360 with supporting evidence; request a fee waiver (Form I-912) if needed",
    "After filing, watch for the prima facie determination notice and any request for evidence",
];

pub(crate) const CONCURRENT_ADJUSTMENT: &str =
    "File Form I-485 concurrently with the I-360 to adjust status as an immediate relative";

pub(crate) const ATTORNEY_REVIEW: &str =
    "Schedule an attorney review to resolve the items flagged for review before filing";

pub(crate) const DOCUMENT_ABUSE_CONNECTION: &str =
    "Document the connection between the conduct and the abuse suffered to support a waiver under INA § 204(a)(1)(C)";

pub(crate) const DOCUMENT_FILING_DELAY: &str =
    "Collect evidence that the abuse was the central reason for filing after age 21";
