//! Technical Blockers & Mitigation Report, version 2.

use super::{bullets, footer, new_document, title_page, verdict, TitleLine};
use crate::compose::{add_label, add_styled_table, CAUTION, MUTED, NEGATIVE};
use crate::model::Document;

/// Registry name.
pub const NAME: &str = "blockers";

/// Output file name.
pub const FILE_NAME: &str = "Family_OS_Technical_Blockers_and_Mitigation_Report_v2.docx";

/// Document title.
pub const TITLE: &str = "Technical Blockers & Mitigation Report";

/// Build the report.
pub fn build() -> Document {
    let mut doc = new_document(
        FILE_NAME,
        TITLE,
        "Production risk analysis with POC/Spike validation findings",
        (2026, 2, 16),
    );

    title_page(
        &mut doc,
        6,
        TITLE,
        &[
            TitleLine {
                text: "PRODUCTION RISK ANALYSIS",
                size: 14.0,
                bold: true,
                color: NEGATIVE,
            },
            TitleLine {
                text: "Version 2.0 | February 16, 2026",
                size: 12.0,
                bold: false,
                color: MUTED,
            },
            TitleLine {
                text: "UPDATED WITH POC/SPIKE VALIDATION FINDINGS",
                size: 11.0,
                bold: true,
                color: CAUTION,
            },
        ],
        &[
            "Architecture: React Native (Expo) + Bun + Hono + tRPC + PostgreSQL RLS\n",
            "AI Stack: Google Gemini (MCP, A2UI, A2A)\n",
            "Target Scale: 100 -> 5,000+ families\n",
            "POC Environment: React Native 0.81.5 | Expo SDK 54 | Android (arm64-v8a)",
        ],
    );

    executive_summary(&mut doc);
    v1_blockers(&mut doc);
    new_blockers(&mut doc);
    risk_matrix(&mut doc);
    mitigation_roadmap(&mut doc);
    validation_impact(&mut doc);
    go_no_go(&mut doc);

    doc.add_paragraph("");
    footer(
        &mut doc,
        &[
            "--- End of Technical Risk Assessment ---",
            "Generated on February 16, 2026",
            "V2 updated with POC/Spike findings from HOS-13",
            "Approved for architectural review and production planning",
        ],
    );

    log::debug!("built {} with {} blocks", NAME, doc.blocks().len());
    doc
}

fn executive_summary(doc: &mut Document) {
    doc.add_heading("1. Executive Summary", 1);

    doc.add_heading("1.1 Purpose & Criticality", 2);
    doc.add_paragraph(concat!(
        "This report identifies technical blockers, architectural risks, and mitigation strategies for Family OS, ",
        "a production-grade AI-powered household coordination platform. Early blocker identification is critical ",
        "because cross-module automation creates cascading failure risks, multi-tenant architecture with RLS can ",
        "leak sensitive household data, AI-powered automation requires guardrails, mobile OS constraints limit ",
        "real-time capabilities, and scale amplifies risks.",
    ));

    doc.add_heading("1.2 Version 2.0 Update: New Blockers from POC Validation", 2);
    doc.add_paragraph(concat!(
        "This V2 report adds three new technical blockers discovered during hands-on POC testing (HOS-13, ",
        "February 14-16, 2026). These blockers were not identified in the V1 theoretical analysis because they ",
        "only manifest during actual build and runtime on physical devices. All three have documented mitigations.",
    ));

    let p = doc.add_empty_paragraph();
    add_label(p, "New blockers added in V2:");

    bullets(
        doc,
        &[
            "BLOCKER #19: react-native-quick-crypto CMake/Ninja Infinite Loop on Windows (MEDIUM severity)",
            "BLOCKER #20: react-native-quick-crypto Nitro Module Initialization Failure (HIGH severity)",
            "BLOCKER #21: AES-256-GCM Wrong Key Detection Failure -- Issue #798 (LOW severity)",
        ],
    );

    doc.add_page_break();
}

fn v1_blockers(doc: &mut Document) {
    doc.add_heading("2. Identified Technical Blockers (from V1)", 1);

    doc.add_paragraph(concat!(
        "The following blockers were identified in V1 (February 13, 2026) during architecture review and library ",
        "evaluation. All 18 original blockers remain valid. Refer to V1 report for full details.",
    ));

    doc.add_heading("2.1 External Calendar & Document Processing Blockers", 2);
    add_styled_table(
        doc,
        ["Area", "Blocker Description", "Severity", "Status in V2"],
        &[
            ["Calendar Sync", "No React Native library for CalDAV/iCloud sync. Custom implementation required.", "HIGH", "UNCHANGED. POC1 confirmed expo-calendar works for device-local MVP. External sync remains Post-MVP."],
            ["OAuth Token Refresh", "Access tokens expire (1 hour for Google). Background refresh fails when app suspended.", "HIGH", "UNCHANGED. Post-MVP concern."],
            ["Calendar Conflict Resolution", "Two-way sync creates conflicts when event edited in both systems.", "MEDIUM", "UNCHANGED. Post-MVP concern."],
            ["PDF Encryption Performance", "Decrypting 50MB PDF in memory causes crashes on older devices.", "HIGH", "POC4 PARTIALLY VALIDATED. Encryption library works but has build configuration issues. See new blockers #19-20."],
        ],
    );

    doc.add_paragraph("");
    doc.add_paragraph(concat!(
        "Note: All other V1 blockers (AI System Risks, Mobile Platform Constraints, Security & Compliance, ",
        "Scaling Risks) remain unchanged in V2. Refer to V1 report sections 3.2-3.5 for full details.",
    ));

    doc.add_page_break();
}

fn new_blockers(doc: &mut Document) {
    doc.add_heading("3. New Technical Blockers (Discovered in POC Validation)", 1);

    doc.add_paragraph(concat!(
        "The following three blockers were discovered during hands-on POC4 (Encryption) testing and were not ",
        "present in the V1 theoretical analysis. Each blocker includes root cause, error details, and verified fix.",
    ));

    doc.add_heading("3.1 BLOCKER #19: react-native-quick-crypto CMake/Ninja Build Loop (Windows)", 2);
    add_styled_table(
        doc,
        ["Field", "Details"],
        &[
            ["Blocker ID", "#19 (NEW in V2)"],
            ["Severity", "MEDIUM"],
            ["Area", "Encryption -- Build System"],
            ["Affected Library", "react-native-quick-crypto v1.0.11"],
            ["Error Message", "ninja: error: manifest 'build.ninja' still dirty after 100 tries"],
            ["Root Cause", "CMake + Ninja build system enters infinite regeneration loop when building for armeabi-v7a (32-bit ARM) architecture on Windows. This is a known issue with react-native-quick-crypto's native Nitro Module build configuration. The CMake build files reference dependencies that trigger continuous re-generation for the 32-bit target."],
            ["Impact", "Build fails completely on Windows when targeting 32-bit ARM. Cannot produce APK that includes armeabi-v7a support. Affects development workflow on Windows machines."],
            ["Verified Fix", "Build only for arm64-v8a (64-bit ARM) architecture by passing the architecture flag to Gradle:\n\ngradlew.bat app:installDebug -PreactNativeArchitectures=arm64-v8a -x lint -x test\n\nThis skips the problematic 32-bit build entirely. Since modern Android devices (2018+) all support arm64-v8a, this has minimal production impact."],
            ["Production Impact", "LOW. Modern Android devices are 64-bit. Google Play requires arm64-v8a support since August 2019. Dropping armeabi-v7a only affects very old devices (pre-2018). For production builds, use CI/CD on Linux/macOS where this issue does not occur."],
        ],
    );
    doc.add_paragraph("");

    doc.add_heading("3.2 BLOCKER #20: react-native-quick-crypto Nitro Module Initialization Failure", 2);
    add_styled_table(
        doc,
        ["Field", "Details"],
        &[
            ["Blocker ID", "#20 (NEW in V2)"],
            ["Severity", "HIGH"],
            ["Area", "Encryption -- Runtime Initialization"],
            ["Affected Library", "react-native-quick-crypto v1.0.11"],
            ["Error Message", "Cannot read property 'PKCS1' of undefined"],
            ["Root Cause", "react-native-quick-crypto v1.0.11 uses Nitro Modules (native C++ modules via JSI). The native module fails to initialize at runtime because: (1) react-native-quick-crypto was NOT listed in the plugins array of app.json, and (2) expo-build-properties was not installed. Both are required for the Nitro Module to be properly linked during the Expo prebuild process."],
            ["Impact", "CRITICAL at development time. The app crashes immediately when any crypto function is called. All encryption functionality is blocked until this is resolved. Without the fix, AES-256-GCM encryption for Document Vault is completely non-functional."],
            ["Verified Fix", "1. Install expo-build-properties:\n   npm install expo-build-properties\n\n2. Update app.json plugins array to include all three:\n   \"plugins\": [\n     \"expo-secure-store\",\n     \"react-native-quick-crypto\",\n     \"expo-build-properties\"\n   ]\n\n3. Clean prebuild and rebuild:\n   npx expo prebuild --clean\n   Then rebuild the Development Build."],
            ["Production Impact", "NONE after fix applied. This is a one-time configuration issue. Once app.json is correctly configured and the project is prebuilt, the Nitro Module initializes correctly. Document this in the project setup guide for all developers."],
        ],
    );
    doc.add_paragraph("");

    doc.add_heading("3.3 BLOCKER #21: AES-256-GCM Wrong Key Detection Failure (Issue #798)", 2);
    add_styled_table(
        doc,
        ["Field", "Details"],
        &[
            ["Blocker ID", "#21 (NEW in V2)"],
            ["Severity", "LOW"],
            ["Area", "Encryption -- Security Verification"],
            ["Affected Library", "react-native-quick-crypto v1.0.11"],
            ["Issue Reference", "GitHub Issue #798 on react-native-quick-crypto"],
            ["Root Cause", "When decrypting AES-256-GCM ciphertext with an incorrect key, decipher.final() may NOT throw an error as expected. In standard Node.js crypto, decrypting with a wrong key should throw 'Unsupported state or unable to authenticate data'. In react-native-quick-crypto, this error may be silently swallowed, returning garbage data instead."],
            ["Impact", "LOW for Family OS. Without explicit error throwing, the application cannot rely solely on try/catch around decipher.final() to detect tampering or wrong-key scenarios. Decrypted data may appear as garbled text rather than triggering an error. This is a security concern for Document Vault -- a user could potentially decrypt a document with the wrong key and see corrupted (but not rejected) content."],
            ["Verified Mitigation", "Implement application-level auth tag verification:\n\n1. After encryption, store the GCM auth tag alongside the ciphertext.\n2. Before decryption, manually verify the auth tag.\n3. If verification fails, reject the decryption attempt BEFORE calling decipher.final().\n4. Additionally, add a known-plaintext header (e.g., magic bytes 'FAMILYOS_V1') to all encrypted data. After decryption, check if the header is present. If not, the key was wrong.\n\nThis provides defense-in-depth regardless of whether the library throws correctly."],
            ["Production Impact", "LOW with mitigation applied. The auth tag verification provides equivalent security to the expected throw behavior. Add this verification to the encryption utility module during production development."],
        ],
    );

    doc.add_page_break();
}

fn risk_matrix(doc: &mut Document) {
    doc.add_heading("4. Updated Risk Prioritization Matrix (V2)", 1);

    doc.add_paragraph(concat!(
        "This matrix includes the three new blockers from POC validation alongside the original V1 risks. ",
        "New entries are marked with (NEW).",
    ));

    add_styled_table(
        doc,
        ["Risk", "Probability (1-5)", "Impact (1-5)", "Priority Score", "Mitigation Timeline"],
        &[
            ["PDF Encryption Memory Crash", "4", "4", "16", "Before MVP (chunked decryption)"],
            ["AI Hallucination (Financial)", "4", "4", "16", "Before MVP (validation layer)"],
            ["Gemini API Rate Limits", "4", "4", "16", "Before 1,000 families"],
            ["JWT Token Leakage", "3", "5", "15", "Before MVP (secure storage)"],
            ["File Storage Public Exposure", "3", "5", "15", "Before MVP (GCS config)"],
            ["iOS Background WebSocket Kill", "5", "3", "15", "MVP (accept + push notifs)"],
            ["Cross-Module Cascade Failures", "3", "4", "12", "Phase 2"],
            ["(NEW) Nitro Module Init Failure #20", "3", "4", "12", "Before MVP (app.json config)"],
            ["RLS Policy Bypass", "2", "5", "10", "Before MVP (security testing)"],
            ["PostgreSQL Connection Exhaustion", "2", "5", "10", "Before 1,000 families"],
            ["Concurrent Edit Conflicts", "3", "3", "9", "Phase 2"],
            ["Google Cloud STT Cost", "3", "3", "9", "MVP (usage caps)"],
            ["OAuth Token Refresh", "3", "3", "9", "Phase 2"],
            ["OCR Accuracy Drops", "4", "2", "8", "MVP (confidence thresholds)"],
            ["(NEW) CMake Ninja Loop #19", "3", "2", "6", "MVP (build for arm64 only)"],
            ["Network Partition Split-Brain", "2", "2", "4", "MVP (UUID primary keys)"],
            ["(NEW) Wrong Key Detection #21", "2", "2", "4", "MVP (auth tag verification)"],
        ],
    );

    doc.add_page_break();
}

fn mitigation_roadmap(doc: &mut Document) {
    doc.add_heading("5. Updated Mitigation Roadmap (V2)", 1);

    doc.add_heading("5.1 Critical Path: Must Solve Before MVP Launch", 2);
    doc.add_paragraph(
        "All items from V1 Section 5.1 remain. The following items are ADDED based on POC findings:",
    );

    doc.add_heading("Encryption Configuration (NEW -- Immediate):", 3);
    bullets(
        doc,
        &[
            "Add react-native-quick-crypto and expo-build-properties to app.json plugins array in ALL project configurations.",
            "Document the required app.json plugin configuration in the project README and developer onboarding guide.",
            "Configure CI/CD builds to target arm64-v8a architecture on Windows build agents. Use Linux/macOS for production builds.",
            "Implement application-level auth tag verification for AES-256-GCM decryption (defense against Issue #798).",
            "Add known-plaintext header ('FAMILYOS_V1') to encrypted data for wrong-key detection.",
            "Test encryption/decryption round-trip in CI/CD pipeline to catch configuration regressions early.",
        ],
    );

    doc.add_heading("5.2 V1 Mitigations (Unchanged)", 2);
    doc.add_paragraph(concat!(
        "All mitigation items from V1 Sections 5.1 (Security Hardening, AI Validation Layer, Mobile Platform ",
        "Resilience, Cost Controls), 5.2 (Phase 2 Enhancements), and 5.3 (Infrastructure Scaling) remain ",
        "unchanged and valid. Refer to V1 report for full details.",
    ));

    doc.add_page_break();
}

fn validation_impact(doc: &mut Document) {
    doc.add_heading("6. POC Validation Impact on Overall Risk Assessment", 1);

    doc.add_heading("6.1 Risks Reduced by POC Validation", 2);
    add_styled_table(
        doc,
        ["Risk Area", "V1 Assessment", "V2 Assessment (Post-POC)"],
        &[
            ["Calendar Library Compatibility", "MEDIUM -- Uncertain if expo-calendar works with Expo SDK 52+", "LOW -- POC1 confirmed expo-calendar v15.0.8 works with Expo SDK 54. React-native-calendars and big-calendar also validated."],
            ["PDF Viewer Stability", "MEDIUM -- react-native-pdf has 'occasional Android crashes'", "LOW -- POC2 confirmed stable rendering on Android for 1-page, 6-page, and 100+ page PDFs."],
            ["OCR Accuracy", "MEDIUM -- Theoretical accuracy claims", "LOW -- POC3 confirmed ML Kit on-device OCR provides fast, accurate text extraction with block-level coordinates."],
            ["WebSocket + Zustand Integration", "MEDIUM -- Custom wrapper complexity", "LOW -- POC5 confirmed straightforward integration. No wrapper library needed. Auto-reconnect works."],
        ],
    );
    doc.add_paragraph("");

    doc.add_heading("6.2 Risks Increased/Discovered by POC Validation", 2);
    add_styled_table(
        doc,
        ["Risk Area", "V1 Assessment", "V2 Assessment (Post-POC)"],
        &[
            ["Encryption Build Complexity", "MEDIUM -- 'JSI-based, requires careful setup'", "HIGH -- Two separate build/runtime errors discovered. Requires arm64-only builds on Windows and specific plugin configuration. Mitigations documented but adds developer onboarding friction."],
            ["Encryption Version Mismatch", "Not identified", "MEDIUM -- V1 listed ~0.7.5 but actual version is 1.0.11 (major version jump). Nitro Modules architecture is completely different from v0.7.x. Documentation and examples from older versions are incompatible."],
            ["Wrong Key Detection", "Not identified", "LOW -- Issue #798 means decipher.final() may not throw on wrong key. Mitigation: application-level auth tag verification."],
        ],
    );

    doc.add_page_break();
}

fn go_no_go(doc: &mut Document) {
    doc.add_heading("7. Technical Go / No-Go Assessment (Updated)", 1);

    doc.add_heading("7.1 Feasibility with Current Stack", 2);
    verdict(doc, "Verdict: ", "GO (with conditions)");
    doc.add_paragraph(concat!(
        "Family OS remains technically feasible with the current architecture. POC validation has INCREASED ",
        "overall confidence by confirming 4 out of 5 critical areas work as expected. The encryption area requires ",
        "documented configuration steps but is functional.",
    ));

    doc.add_heading("7.2 Updated Confidence Rating", 2);
    verdict(doc, "Confidence Rating: ", "HIGH (8.5/10) -- Up from 8/10 in V1");
    doc.add_paragraph("Confidence adjustments from V1:");
    bullets(
        doc,
        &[
            "+0.5: POC validation confirmed 4/5 critical libraries work on actual devices (not just theoretical)",
            "+0.5: Calendar, PDF, OCR, WebSocket risks reduced from MEDIUM to LOW based on hands-on testing",
            "-0.5: Encryption build complexity higher than expected (CMake issues, Nitro Module configuration)",
            "Net: +0.5 improvement over V1 baseline",
        ],
    );

    doc.add_heading("7.3 Conditions for Production Launch (Updated)", 2);
    bullets(
        doc,
        &[
            "Complete all 'Critical Path: Must Solve Before MVP Launch' items (V1 Section 5.1 + V2 Section 5.1)",
            "Verify react-native-quick-crypto encryption round-trip works end-to-end in production build configuration",
            "Implement application-level auth tag verification for AES-256-GCM (Issue #798 mitigation)",
            "Pass penetration testing for RLS bypass, JWT manipulation, file access",
            "Load testing: 500 concurrent users, validate no connection pool exhaustion",
            "Encryption performance testing on target devices (iPhone 8, Android API 23)",
            "AI validation layer tested with 100+ real receipts/invitations",
            "Monitoring dashboard operational with automated alerts",
            "Document POC4 build configuration in developer onboarding guide",
        ],
    );
    doc.add_paragraph("");

    verdict(doc, "Architectural Approval: ", "GRANTED (Conditional)");
    doc.add_paragraph(concat!(
        "Once conditions are met, architecture is approved for production deployment with up to 1,000 families. ",
        "Re-assessment required before scaling to 5,000+ families.",
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::POSITIVE;

    #[test]
    fn test_risk_analysis_line() {
        let doc = build();
        let line = doc
            .paragraphs()
            .find(|p| p.plain_text() == "PRODUCTION RISK ANALYSIS")
            .unwrap();
        let run = &line.runs()[0];
        assert_eq!(run.style.color, Some(NEGATIVE));
        assert_eq!(run.style.font_size, Some(14.0));
        assert!(run.style.bold);
    }

    #[test]
    fn test_tables() {
        let doc = build();
        let shape: Vec<(usize, usize)> = doc
            .tables()
            .map(|t| (t.row_count(), t.column_count()))
            .collect();
        assert_eq!(
            shape,
            vec![(5, 4), (10, 2), (10, 2), (10, 2), (18, 5), (5, 3), (4, 3)]
        );
    }

    #[test]
    fn test_verdicts_green() {
        let doc = build();
        let approvals: Vec<_> = doc
            .paragraphs()
            .filter(|p| p.plain_text().starts_with("Architectural Approval: "))
            .collect();
        assert_eq!(approvals.len(), 1);
        assert_eq!(approvals[0].runs()[1].style.color, Some(POSITIVE));
    }

    #[test]
    fn test_footer_has_four_lines() {
        let doc = build();
        let paragraphs: Vec<_> = doc.paragraphs().collect();
        let tail = &paragraphs[paragraphs.len() - 4..];
        assert_eq!(tail[0].plain_text(), "--- End of Technical Risk Assessment ---");
        assert_eq!(tail[0].runs()[0].style.font_size, None);
        assert!(tail[1..]
            .iter()
            .all(|p| p.runs()[0].style.font_size == Some(9.0)));
    }
}
