//! Built-in sample contract used when no input file is given.

/// A software license and services agreement exercising every part of the schema.
pub const SAMPLE_CONTRACT: &str = r#"MASTER SOFTWARE LICENSE AND SERVICES AGREEMENT - Ref: MSSA-2024-TS-SL

This Master Software License and Services Agreement ("Agreement") is effective as of July 15, 2024 ("Effective Date"), and executed on July 10, 2024 ("Execution Date"), by and between Quantum Dynamics Inc., a Delaware corporation with offices at 1 Quantum Leap, Palo Alto, CA 94301 ("Quantum"), and Global Synergy Partners LLC, a New York limited liability company with its principal place of business at 789 World Ave, New York, NY 10001 ("Synergy").

RECITALS
A. Quantum develops and licenses proprietary software known as "FusionPlatform" version 3.0, including modules "DataCore" and "AnalyticsSuite".
B. Synergy wishes to license FusionPlatform and receive related support services for use in automating financial data analytics and reporting workflows across their global operations.

AGREEMENT

LICENSE GRANT. Quantum grants Synergy a non-exclusive, worldwide, 3-year subscription license to use FusionPlatform v3.0 (DataCore & AnalyticsSuite modules) for up to 250 named users solely for Synergy's internal business operations. The license is for SaaS deployment only and is non-transferable. Sub-licensing is prohibited.

TERRITORY. The license applies globally, limited to Synergy's internal business operations across its offices in North America, Europe, and Asia.

SERVICES. Quantum will provide Standard Support (8x5, Pacific Time) and basic implementation services as outlined in Exhibit A. Standard Support includes 24-hour response time for non-critical issues and 4-hour response time for critical incidents, as per SLA in Exhibit B.

DELIVERABLES. Key deliverables include the configured FusionPlatform instance, access credentials, integration documentation, and onboarding training sessions for Synergy's admin team.

FEES. Synergy shall pay Quantum a total Subscription Fee of $150,000 USD annually, due Net 30 days from the start of each subscription year. Implementation Services fee is a one-time charge of $25,000 USD due upon signing. Payment milestones:
- Year 1 subscription: $150,000 - due July 15, 2024
- Implementation: $25,000 - due July 10, 2024
- Subsequent subscriptions: $150,000 annually on July 15, 2025 and July 15, 2026

PENALTIES. Late payments accrue 1.5% monthly interest. Breach of SLA response time commitments will result in service credits of up to 5% of monthly subscription fee.

TERM AND TERMINATION. This Agreement commences on the Effective Date and continues for three (3) years. It renews automatically for successive 1-year terms unless either party provides written notice of non-renewal at least 90 days prior to the end of the then-current term. Either party may terminate for material breach upon 30 days' written notice if the breach remains uncured.

CONFIDENTIALITY. Each party agrees to maintain confidentiality of all proprietary information exchanged under this Agreement. Obligations last for 5 years post-termination.

DATA PRIVACY. Both parties shall comply with all applicable data privacy laws including the CCPA and GDPR. Quantum agrees not to access, share, or store any client data unless explicitly authorized.

IP OWNERSHIP. All intellectual property rights in FusionPlatform, including its components and updates, remain solely with Quantum. Synergy shall not reverse engineer, decompile, or copy the software.

INSURANCE. Quantum shall maintain professional liability and cyber insurance coverage of at least $2 million throughout the term of this Agreement.

GOVERNING LAW & JURISDICTION. This Agreement is governed by the laws of the State of California, without regard to conflict of law principles. Disputes shall be resolved exclusively in the state or federal courts located in Santa Clara County, California.

ACCEPTANCE. Use of the software constitutes acceptance. Delivery shall occur within 5 business days of Effective Date.

IN WITNESS WHEREOF... [Signatures]

Exhibit A: Services Description (Attached)
Exhibit B: SLA & Support Commitments
Amendment No. 1: Pricing Adjustment (Dated Aug 1, 2024 - Attached)
"#;
