//! ECS cluster on EC2 behind an application load balancer.
//!
//! ```text
//!   Internet ──:80──▶ EcsLoadBalancer ──▶ TargetGroup ──▶ ECS instances
//!                        (ElbSecurityGroup)               (EcsSecurityGroup)
//!                                                         AutoScalingGroup
//!                                                         CoreOS + ecs-agent
//! ```
//!
//! Parameters pick the VPC, subnets, key pair and group sizes; everything
//! else is fixed.

use stratus_core::domain::{
    DomainError, Parameter, PseudoParam, Reference, Resource, StackDefinition, Template, Value,
    base64, join, pseudo,
};

/// CoreOS stable 1235.6.0 (HVM).
const IMAGE_ID: &str = "ami-328a8056";
const INSTANCE_TYPE: &str = "t2.micro";
const LOG_RETENTION_DAYS: i64 = 14;

#[derive(Debug, Clone, Copy, Default)]
pub struct EcsClusterStack;

impl StackDefinition for EcsClusterStack {
    fn name(&self) -> &'static str {
        "ecs-cluster"
    }

    fn summary(&self) -> &'static str {
        "ECS cluster on EC2 instances behind an application load balancer"
    }

    fn build(&self) -> Result<Template, DomainError> {
        let mut t = Template::new();

        // ── Parameters ──────────────────────────────────────────────────────
        let vpc_id = t.add_parameter(
            Parameter::builder("VpcId", "AWS::EC2::VPC::Id")
                .description("VPC ID for ECS Cluster")
                .build()?,
        )?;
        let subnet_id = t.add_parameter(
            Parameter::builder("SubnetId", "List<AWS::EC2::Subnet::Id>")
                .description("Select the subnets to be used by the cluster")
                .build()?,
        )?;
        let key_name = t.add_parameter(
            Parameter::builder("KeyName", "AWS::EC2::KeyPair::KeyName")
                .description("Name of existing key pair for SSH access")
                .build()?,
        )?;
        let min_size = t.add_parameter(
            Parameter::builder("MinSize", "Number")
                .description("Minimum size of Auto Scaling group (at least one per AZ recommended)")
                .build()?,
        )?;
        let max_size = t.add_parameter(
            Parameter::builder("MaxSize", "Number")
                .description("Maximum size of Auto Scaling group")
                .build()?,
        )?;
        let desired = t.add_parameter(
            Parameter::builder("DesiredCapacity", "Number")
                .description("Desired capacity of Auto Scaling group")
                .build()?,
        )?;

        // ── Cluster and network ─────────────────────────────────────────────
        let cluster = t.add_resource(Resource::builder("ECSCluster", "AWS::ECS::Cluster").build()?)?;

        let ecs_sg = t.add_resource(
            Resource::builder("EcsSecurityGroup", "AWS::EC2::SecurityGroup")
                .property("GroupDescription", "ECS Security Group")
                .property("VpcId", &vpc_id)
                .build()?,
        )?;
        let elb_sg = t.add_resource(
            Resource::builder("ElbSecurityGroup", "AWS::EC2::SecurityGroup")
                .property("GroupDescription", "ELB Security Group")
                .property("VpcId", &vpc_id)
                .build()?,
        )?;
        t.add_resource(
            Resource::builder("ElbSecurityGroupInbound80", "AWS::EC2::SecurityGroupIngress")
                .property("GroupId", &elb_sg)
                .property("IpProtocol", "tcp")
                .property("FromPort", 80)
                .property("ToPort", 80)
                .property("CidrIp", "0.0.0.0/0")
                .build()?,
        )?;
        t.add_resource(
            Resource::builder("EcsSecurityGroupInboundElb", "AWS::EC2::SecurityGroupIngress")
                .property("GroupId", &ecs_sg)
                .property("IpProtocol", "tcp")
                .property("FromPort", 80)
                .property("ToPort", 80)
                .property("SourceSecurityGroupId", &elb_sg)
                .build()?,
        )?;
        t.add_resource(
            Resource::builder("EcsLogGroup", "AWS::Logs::LogGroup")
                .property(
                    "LogGroupName",
                    join(
                        "",
                        vec![Value::from("EcsLogGroup-"), pseudo(PseudoParam::StackName)],
                    ),
                )
                .property("RetentionInDays", LOG_RETENTION_DAYS)
                .build()?,
        )?;

        // ── Load balancer ───────────────────────────────────────────────────
        let load_balancer = t.add_resource(
            Resource::builder("EcsLoadBalancer", "AWS::ElasticLoadBalancingV2::LoadBalancer")
                .property("Name", "EcsLoadBalancer")
                .property("Scheme", "internet-facing")
                .property(
                    "LoadBalancerAttributes",
                    vec![Value::map([
                        ("Key", "idle_timeout.timeout_seconds"),
                        ("Value", "30"),
                    ])],
                )
                .property("Subnets", &subnet_id)
                .property("SecurityGroups", vec![&elb_sg])
                .build()?,
        )?;
        let target_group = t.add_resource(
            Resource::builder(
                "EcsLoadBalancerTargetGroup",
                "AWS::ElasticLoadBalancingV2::TargetGroup",
            )
            .depends_on(&load_balancer)
            .property("Name", "EcsLoadBalancerTargetGroup")
            .property("HealthCheckIntervalSeconds", 10)
            .property("HealthCheckPath", "/")
            .property("HealthCheckProtocol", "HTTP")
            .property("HealthCheckTimeoutSeconds", 5)
            .property("HealthyThresholdCount", 2)
            .property("UnhealthyThresholdCount", 2)
            .property("Port", 80)
            .property("Protocol", "HTTP")
            .property("VpcId", &vpc_id)
            .build()?,
        )?;
        t.add_resource(
            Resource::builder("EcsLoadBalancerListener", "AWS::ElasticLoadBalancingV2::Listener")
                .property("Port", 80)
                .property("Protocol", "HTTP")
                .property("LoadBalancerArn", &load_balancer)
                .property(
                    "DefaultActions",
                    vec![Value::map([
                        ("Type", Value::from("forward")),
                        ("TargetGroupArn", Value::from(&target_group)),
                    ])],
                )
                .build()?,
        )?;

        // ── Instances ───────────────────────────────────────────────────────
        let role = t.add_resource(
            Resource::builder("EcsEc2Role", "AWS::IAM::Role")
                .property("AssumeRolePolicyDocument", assume_role_policy())
                .property("Path", "/")
                .property("Policies", vec![ecs_policy()])
                .build()?,
        )?;
        let instance_profile = t.add_resource(
            Resource::builder("EcsEc2InstanceProfile", "AWS::IAM::InstanceProfile")
                .property("Path", "/")
                .property("Roles", vec![&role])
                .build()?,
        )?;
        let launch_config = t.add_resource(
            Resource::builder(
                "EcsAutoScalingLaunchConfig",
                "AWS::AutoScaling::LaunchConfiguration",
            )
            .property("ImageId", IMAGE_ID)
            .property("SecurityGroups", vec![&ecs_sg])
            .property("InstanceType", INSTANCE_TYPE)
            .property("IamInstanceProfile", &instance_profile)
            .property("KeyName", &key_name)
            .property("UserData", base64(join("", user_data(&cluster))))
            .build()?,
        )?;
        t.add_resource(
            Resource::builder("EcsAutoScalingGroup", "AWS::AutoScaling::AutoScalingGroup")
                .property("VPCZoneIdentifier", &subnet_id)
                .property("LaunchConfigurationName", &launch_config)
                .property("MinSize", &min_size)
                .property("MaxSize", &max_size)
                .property("DesiredCapacity", &desired)
                .build()?,
        )?;

        Ok(t)
    }
}

fn assume_role_policy() -> Value {
    Value::map([(
        "Statement",
        vec![Value::map([
            ("Action", Value::from("sts:AssumeRole")),
            (
                "Principal",
                Value::map([("Service", vec!["ec2.amazonaws.com"])]),
            ),
            ("Effect", Value::from("Allow")),
        ])],
    )])
}

fn ecs_policy() -> Value {
    let actions = vec![
        "ecs:CreateCluster",
        "ecs:DeregisterContainerInstance",
        "ecs:DiscoverPollEndpoint",
        "ecs:Poll",
        "ecs:RegisterContainerInstance",
        "ecs:StartTelemetrySession",
        "ecs:Submit*",
        "logs:CreateLogStream",
        "logs:PutLogEvents",
    ];

    Value::map([
        ("PolicyName", Value::from("EcsPolicy")),
        (
            "PolicyDocument",
            Value::map([(
                "Statement",
                vec![Value::map([
                    ("Action", Value::from(actions)),
                    ("Resource", Value::from("*")),
                    ("Effect", Value::from("Allow")),
                ])],
            )]),
        ),
    ])
}

/// CoreOS cloud-config that runs the ECS agent joined to `cluster`.
fn user_data(cluster: &Reference) -> Vec<Value> {
    let head = [
        "#cloud-config\n\n",
        "coreos:\n",
        " units:\n",
        "   - name: amazon-ecs-agent.service\n",
        "     command: start\n",
        "     runtime: true\n",
        "     content: |\n",
        "       [Unit]\n",
        "       Description=AWS ECS Agent\n",
        "       Documentation=https://docs.aws.amazon.com/AmazonECS/latest/developerguide/\n",
        "       Requires=docker.socket\n",
        "       After=docker.socket\n\n",
        "       [Service]\n",
        "       Environment=ECS_CLUSTER=",
    ];
    let tail = [
        "\n",
        "       Environment=ECS_LOGLEVEL=info\n",
        "       Environment=ECS_VERSION=latest\n",
        "       Restart=on-failure\n",
        "       RestartSec=30\n",
        "       RestartPreventExitStatus=5\n",
        "       SyslogIdentifier=ecs-agent\n",
        "       ExecStartPre=-/bin/mkdir -p /var/log/ecs /var/ecs-data /etc/ecs\n",
        "       ExecStartPre=-/usr/bin/touch /etc/ecs/ecs.config\n",
        "       ExecStartPre=-/usr/bin/docker kill ecs-agent\n",
        "       ExecStartPre=-/usr/bin/docker rm ecs-agent\n",
        "       ExecStartPre=/usr/bin/docker pull amazon/amazon-ecs-agent:${ECS_VERSION}\n",
        "       ExecStart=/usr/bin/docker run --name ecs-agent ",
        "--env-file=/etc/ecs/ecs.config ",
        "--volume=/var/run/docker.sock:/var/run/docker.sock ",
        "--volume=/var/log/ecs:/log ",
        "--volume=/var/ecs-data:/data ",
        "--volume=/sys/fs/cgroup:/sys/fs/cgroup:ro ",
        "--volume=/run/docker/execdriver/native:/var/lib/docker/execdriver/native:ro ",
        "--publish=127.0.0.1:51678:51678 ",
        "--env=ECS_LOGFILE=/log/ecs-agent.log ",
        "--env=ECS_LOGLEVEL=info ",
        "--env=ECS_DATADIR=/data ",
        "--env=ECS_CLUSTER=${ECS_CLUSTER} ",
        "--env=ECS_AVAILABLE_LOGGING_DRIVERS=[\"json-file\",\"awslogs\"] ",
        "amazon/amazon-ecs-agent:latest\n\n",
        "   - name: docker-cleanup.service\n",
        "     content: |\n",
        "       [Unit]\n",
        "       Description=Docker images cleanup\n",
        "       [Service]\n",
        "       Type=oneshot\n",
        "       ExecStart=-/usr/bin/sh -c \"docker images -q | xargs --no-run-if-empty docker rmi\"\n\n",
        "   - name: docker-cleanup.timer\n",
        "     command: start\n",
        "     content: |\n",
        "       [Unit]\n",
        "       Description=Run Docker cleanup daily\n\n",
        "       [Timer]\n",
        "       OnCalendar=daily\n",
        "       Persistent=true\n",
    ];

    head.into_iter()
        .map(Value::from)
        .chain(std::iter::once(Value::from(cluster)))
        .chain(tail.into_iter().map(Value::from))
        .collect()
}
